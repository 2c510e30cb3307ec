use clap::*;
use nwt::libs::tree::io;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("order")
        .about("Order nodes in a Newick file by subtree size")
        .after_help(
            r###"
Sorts the children of each node without changing the topology (ladderize).

Notes:
* Subtree size is the number of nodes in the child's subtree; a leaf counts 1.
* Children of equal size keep their input order.
* `--nd` (the default) puts smaller subtrees first; `--ndr` reverses.

Examples:
1. Smaller subtrees first:
   nwt order tree.nwk --nd

2. Larger subtrees first:
   nwt order tree.nwk --ndr

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .num_args(1)
                .index(1)
                .help("Input filename. [stdin] for standard input"),
        )
        .arg(arg!(--nd  "By number of descendants, smaller subtrees first"))
        .arg(arg!(--ndr "By number of descendants, reversely"))
        .group(ArgGroup::new("number-of-descendants").args(["nd", "ndr"]))
        .arg(
            Arg::new("outfile")
                .short('o')
                .long("outfile")
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    let mut writer = intspan::writer(args.get_one::<String>("outfile").unwrap());

    let descending = args.get_flag("ndr");

    let infile = args.get_one::<String>("infile").unwrap();
    let mut trees = io::from_file(infile)?;

    for tree in &mut trees {
        tree.sort_by_size(descending);

        let out_string = tree.to_newick() + ";";
        writer.write_all((out_string + "\n").as_ref())?;
    }

    Ok(())
}
