extern crate clap;
use clap::*;

mod cmd_nwt;

fn main() -> anyhow::Result<()> {
    let app = Command::new("nwt")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`nwt` - Newick Tree toolkit")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_nwt::indent::make_subcommand())
        .subcommand(cmd_nwt::label::make_subcommand())
        .subcommand(cmd_nwt::order::make_subcommand())
        .subcommand(cmd_nwt::stat::make_subcommand())
        .after_help(
            r###"Subcommand groups:

* info: stat / label
* ops:  order
* viz:  indent

"###,
        );

    // Check which subcomamnd the user ran...
    match app.get_matches().subcommand() {
        Some(("indent", sub_matches)) => cmd_nwt::indent::execute(sub_matches),
        Some(("label", sub_matches)) => cmd_nwt::label::execute(sub_matches),
        Some(("order", sub_matches)) => cmd_nwt::order::execute(sub_matches),
        Some(("stat", sub_matches)) => cmd_nwt::stat::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
