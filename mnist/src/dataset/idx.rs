use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

const IMAGES_MAGIC: u32 = 2051;
const LABELS_MAGIC: u32 = 2049;

fn read_u32<R: Read>(reader: &mut R) -> io::Result<u32> {
    let mut buf = [0u8; 4];
    reader.read_exact(&mut buf)?;
    Ok(u32::from_be_bytes(buf))
}

/// Reads an idx3 image file: raw pixels plus (count, rows, cols).
pub fn read_images(path: &Path) -> io::Result<(Vec<u8>, usize, usize, usize)> {
    let mut reader = BufReader::new(File::open(path)?);

    let magic = read_u32(&mut reader)?;
    if magic != IMAGES_MAGIC {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Bad idx3 magic {}", magic),
        ));
    }

    let count = read_u32(&mut reader)? as usize;
    let rows = read_u32(&mut reader)? as usize;
    let cols = read_u32(&mut reader)? as usize;

    let mut pixels = vec![0u8; count * rows * cols];
    reader.read_exact(&mut pixels)?;

    Ok((pixels, count, rows, cols))
}

/// Reads an idx1 label file.
pub fn read_labels(path: &Path) -> io::Result<Vec<u8>> {
    let mut reader = BufReader::new(File::open(path)?);

    let magic = read_u32(&mut reader)?;
    if magic != LABELS_MAGIC {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Bad idx1 magic {}", magic),
        ));
    }

    let count = read_u32(&mut reader)? as usize;
    let mut labels = vec![0u8; count];
    reader.read_exact(&mut labels)?;

    Ok(labels)
}
