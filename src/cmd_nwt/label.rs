use clap::*;
use nwt::libs::tree::io;
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("label")
        .about("Labels in the Newick file")
        .after_help(
            r###"
Extracts the tree's labels.

By default, prints all labels that occur in the tree, in the same order as
in the Newick, one per line. Empty labels produce no output.

Notes:
* The `-t` option prints labels on a single line, separated by tabs.
* The `-I` and `-L` options filter out internal or leaf nodes.

Examples:
1. List all labels:
   nwt label tree.nwk

2. Count leaves:
   nwt label tree.nwk -I | wc -l

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .num_args(1)
                .index(1)
                .help("Input filename. [stdin] for standard input"),
        )
        .arg(
            Arg::new("Internal")
                .long("Internal")
                .short('I')
                .action(ArgAction::SetTrue)
                .help("Don't print internal labels"),
        )
        .arg(
            Arg::new("Leaf")
                .long("Leaf")
                .short('L')
                .action(ArgAction::SetTrue)
                .help("Don't print leaf labels"),
        )
        .arg(
            Arg::new("tab")
                .long("tab")
                .short('t')
                .action(ArgAction::SetTrue)
                .help("Print labels on a single line, separated by tab stops"),
        )
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

    let skip_internal = args.get_flag("Internal");
    let skip_leaf = args.get_flag("Leaf");
    let is_tab = args.get_flag("tab");

    let infile = args.get_one::<String>("infile").unwrap();
    let trees = io::from_file(infile)?;

    for tree in trees {
        let mut labels = Vec::new();

        for node in tree.order() {
            if node.is_leaf() {
                if skip_leaf {
                    continue;
                }
            } else if skip_internal {
                continue;
            }

            if let Some(name) = &node.name {
                if !name.is_empty() {
                    labels.push(name.clone());
                }
            }
        }

        if is_tab {
            writer.write_all((labels.join("\t") + "\n").as_ref())?;
        } else {
            for label in labels {
                writer.write_all((label + "\n").as_ref())?;
            }
        }
    }

    Ok(())
}
