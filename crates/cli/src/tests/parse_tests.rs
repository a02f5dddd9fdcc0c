use clap::Parser;

use crate::cmd::Commands;
use crate::output::OutputMode;
use crate::Opts;

#[test]
fn respond_parses_required_flags() {
    let opts = Opts::try_parse_from([
        "autoshield",
        "respond",
        "--alert-id",
        "108",
        "--event-type",
        "SSH_BRUTE_FORCE",
        "--source-ip",
        "203.0.113.5",
    ])
    .unwrap();

    match opts.cmd {
        Commands::Respond(args) => {
            assert_eq!(args.alert_id, 108);
            assert_eq!(args.event_type, "SSH_BRUTE_FORCE");
            assert_eq!(args.source_ip, "203.0.113.5");
            assert_eq!(args.severity, "HIGH");
        }
        _ => panic!("expected respond subcommand"),
    }
}

#[test]
fn respond_requires_alert_id() {
    let result = Opts::try_parse_from([
        "autoshield",
        "respond",
        "--event-type",
        "SSH_BRUTE_FORCE",
        "--source-ip",
        "203.0.113.5",
    ]);
    assert!(result.is_err());
}

#[test]
fn global_json_flag_switches_output_mode() {
    let opts = Opts::try_parse_from(["autoshield", "version", "--json"]).unwrap();
    assert_eq!(opts.output_mode(), OutputMode::Json);

    let opts = Opts::try_parse_from(["autoshield", "version"]).unwrap();
    assert_eq!(opts.output_mode(), OutputMode::Human);
}

#[test]
fn execute_parses_force_and_skip_update() {
    let opts = Opts::try_parse_from([
        "autoshield",
        "execute",
        "--alert-id",
        "7",
        "--event-type",
        "PORT_SCAN",
        "--source-ip",
        "198.51.100.2",
        "--force",
        "--skip-update",
    ])
    .unwrap();

    match opts.cmd {
        Commands::Execute(args) => {
            assert!(args.force);
            assert!(args.skip_update);
        }
        _ => panic!("expected execute subcommand"),
    }
}

#[test]
fn inject_has_test_defaults() {
    let opts = Opts::try_parse_from(["autoshield", "inject", "--source-ip", "192.0.2.1"]).unwrap();

    match opts.cmd {
        Commands::Inject(args) => {
            assert_eq!(args.event_type, "SSH_BRUTE_FORCE");
            assert_eq!(args.severity, "CRITICAL");
            assert_eq!(args.description, "TEST: injected alert");
        }
        _ => panic!("expected inject subcommand"),
    }
}

#[test]
fn block_ip_defaults_to_dry_run() {
    let opts = Opts::try_parse_from(["autoshield", "block-ip", "--ip", "203.0.113.9"]).unwrap();

    match opts.cmd {
        Commands::BlockIp(args) => {
            assert_eq!(args.ip, "203.0.113.9");
            assert!(!args.execute);
        }
        _ => panic!("expected block-ip subcommand"),
    }
}

#[test]
fn backend_and_analysis_urls_are_global() {
    let opts = Opts::try_parse_from([
        "autoshield",
        "version",
        "--backend",
        "http://10.0.0.1:8080",
        "--analysis",
        "http://10.0.0.1:8000",
    ])
    .unwrap();

    assert_eq!(opts.backend.as_deref(), Some("http://10.0.0.1:8080"));
    assert_eq!(opts.analysis.as_deref(), Some("http://10.0.0.1:8000"));
}
