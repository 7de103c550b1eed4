

use std::process::Command;
use std::io::{BufReader, Read};
use std::fs::File;


/// Reads UTF-8 file content as string.
pub fn read_file(filename: &str) -> std::io::Result<String> {
    let mut s = String::new();
    let f = File::open(filename)?;
    let mut reader = BufReader::new(f);
    reader.read_to_string(&mut s)?;
    Ok(s)
}

/// Reads data from file as bytes.
pub fn read_file_vec(filename: &str) -> std::io::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let f = File::open(filename)?;
    let mut reader = BufReader::new(f);
    reader.read_to_end(&mut buf)?;
    Ok(buf)
}

/// Execute command with arguments and wait until finished.
pub fn command_wait(cmd: &str, args: Vec<&str>) -> std::io::Result<()> {
    if let Ok(mut child) = Command::new(cmd).args(args).spawn() {
        child.wait()?;
    }
    Ok(())
}
