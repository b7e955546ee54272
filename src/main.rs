use std::io;
use std::io::stdout;

use chainmap::container::hash::chained_hash_table::ChainedHashTable;
use chainmap::container::hash::hash_table::HashTable;
use chainmap::container::hash::LookupResult;
use chainmap::diagnostics;

fn main() -> io::Result<()> {
    let mut table = ChainedHashTable::new_default(10)?;

    diagnostics::dump(&table, &mut stdout())?;

    table.put(0, -1);
    table.put(2, 2);
    table.put(3, 2);
    table.put(4, 3);
    table.put(1, 2);
    table.put(6, 10);
    table.put(7, 2);
    table.put(1, 100);

    diagnostics::dump(&table, &mut stdout())?;

    table.erase(1);

    // probe with a single slot, then grow the buffer to the reported total
    let mut values = vec![0; 1];
    let lookup = LookupResult::of(table.get(0, &mut values), values.len());
    if lookup.truncated() {
        values = vec![0; lookup.total()];
        table.get(0, &mut values);
    }

    for (i, value) in values.iter().take(lookup.total()).enumerate() {
        println!("value {} is {}", i, value);
    }

    table.erase(0);

    println!("pairs: {}", table.pair_count());

    table.destroy();

    Ok(())
}
