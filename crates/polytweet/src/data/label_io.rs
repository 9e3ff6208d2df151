//! # Label Files
//!
//! Decoded label sequences are written one example per line:
//! ```terminaloutput
//! 1.\thateful,offensive
//! 2.\tnormal
//! 3.\t
//! ```

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::{errors::PTResult, types::IdType, vocab::TaskLabels};

/// Write decoded label sequences to a [`Write`] writer.
///
/// # Arguments
/// * `task` - the task whose label map decodes `encoded`.
/// * `encoded` - the encoded label vectors, in example order.
/// * `writer` - the writer to target.
pub fn write_label_sequences<'a, T, I, W>(
    task: &TaskLabels,
    encoded: I,
    writer: &mut W,
) -> PTResult<()>
where
    T: IdType,
    I: IntoIterator<Item = &'a [T]>,
    W: Write,
{
    for (idx, ids) in encoded.into_iter().enumerate() {
        writeln!(writer, "{}.\t{}", idx + 1, task.decode(ids).join(","))?;
    }
    Ok(())
}

/// Save decoded label sequences to a label file.
///
/// # Arguments
/// * `task` - the task whose label map decodes `encoded`.
/// * `encoded` - the encoded label vectors, in example order.
/// * `path` - the path of the label file.
pub fn save_label_sequences_path<'a, T, I, P>(
    task: &TaskLabels,
    encoded: I,
    path: P,
) -> PTResult<()>
where
    T: IdType,
    I: IntoIterator<Item = &'a [T]>,
    P: AsRef<Path>,
{
    let mut writer = BufWriter::new(File::create(path)?);
    write_label_sequences(task, encoded, &mut writer)?;
    writer.flush()?;
    Ok(())
}
