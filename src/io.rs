use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use tracing::debug;

use crate::generate::generate;
use crate::parse::{parse_lines, ParseError};
use crate::partition::Partition;

/// Errors thrown while reading a `.clu` byte source.
#[derive(Debug)]
#[non_exhaustive]
pub enum ReadError {
    /// The underlying byte source failed, including invalid UTF-8.
    Io(io::Error),

    /// The bytes were readable but not a well-formed `.clu` document.
    Parse(ParseError),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadError::Io(error) => write!(f, "failed to read .clu data: {error}"),
            ReadError::Parse(error) => write!(f, "failed to parse .clu data: {error}"),
        }
    }
}

impl std::error::Error for ReadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReadError::Io(error) => Some(error),
            ReadError::Parse(error) => Some(error),
        }
    }
}

impl From<io::Error> for ReadError {
    fn from(error: io::Error) -> Self {
        ReadError::Io(error)
    }
}

impl From<ParseError> for ReadError {
    fn from(error: ParseError) -> Self {
        ReadError::Parse(error)
    }
}

/// Read a partition from a UTF-8 `.clu` byte source.
///
/// Lines are pulled from the reader one at a time; the first I/O failure
/// aborts the read and is returned unchanged as [`ReadError::Io`].
pub fn read_partition<R: BufRead>(reader: R) -> Result<Partition, ReadError> {
    let mut failed_read: Option<io::Error> = None;
    let lines = reader.lines().map_while(|line| match line {
        Ok(line) => Some(line),
        Err(error) => {
            failed_read = Some(error);
            None
        }
    });

    let parsed = parse_lines(lines);
    if let Some(error) = failed_read {
        return Err(ReadError::Io(error));
    }

    let partition = parsed?;
    debug!(
        "read partition of {} vertices in {} communities",
        partition.vertex_count(),
        partition.community_count(),
    );
    Ok(partition)
}

/// Read a `.clu` file and output the Partition struct.
pub fn read_clu_as_partition(file_path: &Path) -> Result<Partition, ReadError> {
    let file = File::open(file_path)?;
    read_partition(BufReader::new(file))
}

/// Write the partition to a byte sink, one CRLF-terminated line at a time.
pub fn write_partition<W: Write>(partition: &Partition, mut writer: W) -> io::Result<()> {
    for line in generate(partition) {
        write!(writer, "{line}\r\n")?;
    }
    Ok(())
}

/// Write the partition to a `.clu` file.
pub fn write_partition_to_clu_file(partition: &Partition, file_name: &str) -> io::Result<()> {
    let mut file = File::create(file_name)?;
    write_partition(partition, &mut file)
}
