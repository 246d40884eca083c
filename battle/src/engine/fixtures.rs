//! Shared catalog for engine tests

use netrunner_protocol::{Stat, Status};

use crate::types::{BaseStats, Catalog, Daemon, DaemonType, Program, ProgramEffect, Species, TypeChart};

pub(crate) fn catalog() -> Catalog {
    let chart = TypeChart::new()
        .with(DaemonType::Physical, DaemonType::Ghost, 0.0)
        .with(DaemonType::Virus, DaemonType::Encryption, 2.0)
        .with(DaemonType::Virus, DaemonType::Firewall, 0.5)
        .with(DaemonType::Firewall, DaemonType::Virus, 2.0)
        .with(DaemonType::Neural, DaemonType::Physical, 2.0);
    let mut catalog = Catalog::new(chart);

    let programs = [
        Program::new("data_siphon", "Data Siphon", DaemonType::Virus, 40, 95),
        Program::new("packet_flood", "Packet Flood", DaemonType::Virus, 60, 85),
        Program::new("corrupt_code", "Corrupt Code", DaemonType::Virus, 0, 90)
            .with_effect(ProgramEffect::InflictStatus { status: Status::Corrupted }),
        Program::new("lockdown", "Lockdown", DaemonType::Encryption, 0, 80)
            .with_effect(ProgramEffect::InflictStatus { status: Status::Locked }),
        Program::new("throttle", "Throttle", DaemonType::Neural, 0, 90)
            .with_effect(ProgramEffect::InflictStatus { status: Status::Lagging }),
        Program::new("firewall_bash", "Firewall Bash", DaemonType::Firewall, 50, 100),
        Program::new("encrypt_shield", "Encrypt Shield", DaemonType::Encryption, 0, 100)
            .with_effect(ProgramEffect::RaiseStat { stat: Stat::Defense, stages: 1 }),
        Program::new("exploit_scan", "Exploit Scan", DaemonType::Neural, 30, 100)
            .with_effect(ProgramEffect::LowerStat { stat: Stat::Defense, stages: 1 }),
        Program::new("brute_force", "Brute Force", DaemonType::Physical, 45, 100),
        Program::new("phase_shift", "Phase Shift", DaemonType::Ghost, 40, 100),
    ];
    for program in programs {
        catalog.add_program(program).unwrap();
    }

    let species = [
        Species::new("virulet", vec![DaemonType::Virus], BaseStats::new(40, 55, 40, 60), 45)
            .learns(1, "data_siphon")
            .learns(1, "corrupt_code")
            .learns(5, "packet_flood")
            .learns(8, "lockdown"),
        Species::new(
            "pyrowall",
            vec![DaemonType::Firewall, DaemonType::Encryption],
            BaseStats::new(50, 40, 65, 40),
            45,
        )
        .learns(1, "firewall_bash")
        .learns(1, "encrypt_shield")
        .learns(6, "exploit_scan"),
        Species::new("glitch_sprite", vec![DaemonType::Ghost], BaseStats::new(35, 50, 35, 70), 120)
            .learns(1, "phase_shift")
            .learns(3, "throttle"),
        Species::new("rat_bot", vec![DaemonType::Physical], BaseStats::new(30, 40, 30, 55), 190)
            .learns(1, "brute_force"),
        Species::new("null_shell", vec![DaemonType::Shell], BaseStats::new(45, 45, 45, 20), 90),
    ];
    for s in species {
        catalog.add_species(s).unwrap();
    }

    catalog
}

pub(crate) fn daemon(catalog: &Catalog, species: &str, level: u32) -> Daemon {
    Daemon::new(catalog, species, level).unwrap()
}

/// Index of a known program by id
pub(crate) fn slot(daemon: &Daemon, program: &str) -> usize {
    daemon.programs().iter().position(|p| p.id == program).unwrap()
}
