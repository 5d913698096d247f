use super::*;

#[test]
fn parses_db_ping_command() {
    let cli = Cli::try_parse_from(["ngodir-cli", "db", "ping"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Ping
        })
    ));
}

#[test]
fn parses_db_migrate_command() {
    let cli =
        Cli::try_parse_from(["ngodir-cli", "db", "migrate"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Migrate
        })
    ));
}

#[test]
fn parses_db_seed_with_default_path() {
    let cli = Cli::try_parse_from(["ngodir-cli", "db", "seed"]).expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Seed { path: None }
        })
    ));
}

#[test]
fn parses_db_seed_with_explicit_path() {
    let cli = Cli::try_parse_from(["ngodir-cli", "db", "seed", "--path", "seeds/jaipur.yaml"])
        .expect("expected valid cli args");

    assert!(matches!(
        cli.command,
        Some(Commands::Db {
            command: DbCommands::Seed { path: Some(ref p) }
        }) if p == std::path::Path::new("seeds/jaipur.yaml")
    ));
}

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["ngodir-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn search_defaults_radius_to_none() {
    let cli = Cli::try_parse_from(["ngodir-cli", "search", "Jaipur"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            ref query,
            radius_km: None,
            json: false
        }) if query == "Jaipur"
    ));
}

#[test]
fn search_accepts_radius_and_json() {
    let cli = Cli::try_parse_from([
        "ngodir-cli",
        "search",
        "45 MG Road, Jaipur",
        "--radius-km",
        "12.5",
        "--json",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Search {
            ref query,
            radius_km: Some(r),
            json: true
        }) if query == "45 MG Road, Jaipur" && (r - 12.5).abs() < f64::EPSILON
    ));
}

#[test]
fn search_requires_a_query() {
    assert!(Cli::try_parse_from(["ngodir-cli", "search"]).is_err());
}

#[test]
fn geocode_takes_address() {
    let cli = Cli::try_parse_from(["ngodir-cli", "geocode", "Malviya Nagar, Jaipur"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Geocode { ref address }) if address == "Malviya Nagar, Jaipur"
    ));
}

#[test]
fn reverse_geocode_accepts_negative_coordinates() {
    let cli = Cli::try_parse_from([
        "ngodir-cli",
        "reverse-geocode",
        "--lat",
        "-33.86",
        "--lng",
        "151.2",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::ReverseGeocode { lat, lng })
            if (lat + 33.86).abs() < 1e-9 && (lng - 151.2).abs() < 1e-9
    ));
}

#[test]
fn orgs_pending_parses() {
    let cli = Cli::try_parse_from(["ngodir-cli", "orgs", "pending"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Orgs {
            command: OrgsCommands::Pending
        })
    ));
}

#[test]
fn orgs_verify_parses_status_and_options() {
    let id = "6f1c1d8e-3b8c-4f57-9a55-2b3f4f0d9a10";
    let cli = Cli::try_parse_from([
        "ngodir-cli",
        "orgs",
        "verify",
        id,
        "--status",
        "suspended",
        "--reason",
        "duplicate listing",
        "--by",
        "admin@ngodir.in",
    ])
    .unwrap();

    match cli.command {
        Some(Commands::Orgs {
            command:
                OrgsCommands::Verify {
                    public_id,
                    status,
                    badge,
                    reason,
                    by,
                },
        }) => {
            assert_eq!(public_id.to_string(), id);
            assert_eq!(status, OrganizationStatus::Suspended);
            assert_eq!(badge, None);
            assert_eq!(reason.as_deref(), Some("duplicate listing"));
            assert_eq!(by.as_deref(), Some("admin@ngodir.in"));
        }
        other => panic!("unexpected command: {other:?}"),
    }
}

#[test]
fn orgs_verify_accepts_badge() {
    let cli = Cli::try_parse_from([
        "ngodir-cli",
        "orgs",
        "verify",
        "6f1c1d8e-3b8c-4f57-9a55-2b3f4f0d9a10",
        "--status",
        "active",
        "--badge",
        "premium",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Orgs {
            command: OrgsCommands::Verify {
                status: OrganizationStatus::Active,
                badge: Some(VerificationBadge::Premium),
                ..
            }
        })
    ));
}

#[test]
fn orgs_verify_rejects_unknown_status_and_bad_id() {
    let id = "6f1c1d8e-3b8c-4f57-9a55-2b3f4f0d9a10";
    assert!(Cli::try_parse_from(["ngodir-cli", "orgs", "verify", id, "--status", "archived"])
        .is_err());
    assert!(
        Cli::try_parse_from(["ngodir-cli", "orgs", "verify", "not-a-uuid", "--status", "active"])
            .is_err()
    );
    assert!(Cli::try_parse_from(["ngodir-cli", "orgs", "verify", id]).is_err());
}

#[test]
fn submissions_commands_parse() {
    let cli = Cli::try_parse_from(["ngodir-cli", "submissions", "list"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Submissions {
            command: SubmissionsCommands::List
        })
    ));

    let cli = Cli::try_parse_from([
        "ngodir-cli",
        "submissions",
        "registered",
        "6f1c1d8e-3b8c-4f57-9a55-2b3f4f0d9a10",
    ])
    .unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Submissions {
            command: SubmissionsCommands::Registered { .. }
        })
    ));
}

#[test]
fn truncate_shortens_long_values_on_char_boundaries() {
    assert_eq!(truncate("Helping Hands", 20), "Helping Hands");
    assert_eq!(truncate("Helping Hands Foundation", 10), "Helping...");
    assert_eq!(truncate("सेवा ट्रस्ट जयपुर", 8).chars().count(), 8);
}
