use crate::args::{self, ArgSpec};
use crate::{arg, arg_req};
use msort::{err, get_writer, prerr, read_stdin, BlockSorter, Error, Result};
use std::io::Write;

const LONG_HELP: &str = "\
Reads standard input, splits it into blocks with the block pattern, \
and writes the blocks to standard output, sorted by the first capture group \
of the sort pattern. Text between blocks is dropped. \
Blocks where the sort pattern doesn't match sort first, as if their key were empty.

Both patterns are regular expressions where '.' matches newline \
and '^' and '$' match at the start and end of every line.

Example :

for vcard in *.vcf
do
    msort -b 'BEGIN:VCARD.*?END:VCARD\\r\\n\\r\\n' -s '^N:(.*)$' \\
        < \"$vcard\" > \"$vcard\"2
    mv \"$vcard\"2 \"$vcard\"
done

Orders vCards in all vcf files by last name.";

pub fn main(argv: &[String]) -> Result<()> {
    let prog = args::ProgSpec::new("Sort multi-line blocks of text.", LONG_HELP);
    const A: [ArgSpec; 4] = [
        arg_req! {"bp", "b", "Pattern", "Block pattern, used to extract blocks"},
        arg_req! {"sp", "s", "Pattern", "Sort pattern, its first group is the sort key"},
        arg! {"verbose", "v", "", "Report the key of each block on stderr"},
        arg! {"check", "c", "", "Check to see if the blocks are already sorted. Write nothing."},
    ];
    let args = args::parse(&prog, &A, argv)?;

    let mut block_pattern = String::new();
    let mut sort_pattern = String::new();
    let mut verbose = false;
    let mut check = false;
    for x in args {
        match x.name.as_str() {
            "bp" => block_pattern = x.value,
            "sp" => sort_pattern = x.value,
            "verbose" => verbose = true,
            "check" => check = true,
            other => return err!("Unhandled option {}", other),
        }
    }
    let sorter = BlockSorter::new(&block_pattern, &sort_pattern)?;
    let text = read_stdin()?;

    if check {
        return match sorter.ucheck(&text) {
            Some((a, b)) => {
                eprintln!("Blocks out of order : {} sorts after {}", a, b);
                Err(Error::Silent)
            }
            None => Ok(()),
        };
    }

    let mut w = get_writer();
    let blocks = sorter.write_sorted(&text, &mut w)?;
    w.write_all(b"\n")?;
    w.flush()?;
    if verbose {
        eprintln!("{} blocks", blocks.len());
        for b in &blocks {
            prerr(&[(b.index + 1).to_string().as_bytes(), b"\t", b.key]);
        }
    }
    Ok(())
}
