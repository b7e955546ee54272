use std::io;
use std::io::Write;

use crate::container::hash::chained_hash_table::ChainedHashTable;

/// Debugging aid: writes every bucket and its entries in index order, using
/// only the table's read-only iteration surface.
pub fn dump<W: Write>(table: &ChainedHashTable, out: &mut W) -> io::Result<()> {
    writeln!(out, "*********************")?;
    for (index, slot) in table.buckets().enumerate() {
        writeln!(out, "hashkey: {}", index)?;
        match slot {
            Some(list) => {
                writeln!(out, "list size: {}", list.size())?;
                for (key, value) in list.iter() {
                    writeln!(out, "key: {}, val: {}", key, value)?;
                }
            }
            None => {
                writeln!(out, "EMPTY")?;
            }
        }
        writeln!(out)?;
    }

    Ok(())
}
