use clap::CommandFactory;
use clap::Parser;
use pathlens_cli::Cli;
use pathlens_cli::Command;

#[test]
fn cli_definition_is_valid() {
    Cli::command().debug_assert();
}

#[test]
fn path_collects_repeated_edge_exclusions() {
    let cli = Cli::parse_from([
        "pathlens",
        "path",
        "admin",
        "dc01",
        "--exclude-edge",
        "MemberOf",
        "--exclude-edge",
        "HasSession",
    ]);
    match cli.command {
        Command::Path(cmd) => {
            assert_eq!(cmd.start, "admin");
            assert_eq!(cmd.end, "dc01");
            assert_eq!(cmd.exclude_edges, vec!["MemberOf", "HasSession"]);
        }
        other => panic!("expected path command, got {other:?}"),
    }
}

#[test]
fn global_flags_apply_after_the_subcommand() {
    let cli = Cli::parse_from([
        "pathlens",
        "cypher",
        "MATCH (n) RETURN n",
        "--base-url",
        "https://bh.corp.local",
    ]);
    assert_eq!(cli.base_url.as_deref(), Some("https://bh.corp.local"));
    assert!(matches!(cli.command, Command::Cypher(_)));
}
