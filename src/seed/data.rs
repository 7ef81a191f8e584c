use crate::model::{PlayerDetails, TeamDetails};
use crate::store::traits::Store;
use anyhow::Result;
use log::info;

fn player(
    name: &str,
    registration_number: &str,
    branch: &str,
    section: &str,
    year: &str,
) -> PlayerDetails {
    PlayerDetails {
        name: Some(name.to_string()),
        registration_number: Some(registration_number.to_string()),
        branch: Some(branch.to_string()),
        section: Some(section.to_string()),
        year: Some(year.to_string()),
        mobile_number: None,
    }
}

/// Sample registrations for demos and manual testing
pub fn sample_teams() -> Vec<(TeamDetails, Vec<PlayerDetails>)> {
    vec![
        (
            TeamDetails::new("Strikers", "Alpha College", "R. Singh", "M. Rao"),
            vec![
                player("R. Singh", "21CS001", "CSE", "A", "3"),
                player("M. Rao", "21CS017", "CSE", "A", "3"),
                player("A. Kumar", "22EC042", "ECE", "B", "2"),
            ],
        ),
        (
            TeamDetails::new("Chargers", "Alpha College", "K. Iyer", "S. Paul"),
            vec![
                player("K. Iyer", "20ME008", "MECH", "C", "4"),
                player("S. Paul", "21ME031", "MECH", "C", "3"),
            ],
        ),
        (
            TeamDetails::new("Titans", "Beta Institute", "P. Nair", "D. Sen"),
            vec![
                player("P. Nair", "B22IT11", "IT", "A", "2"),
                player("D. Sen", "B22IT19", "IT", "A", "2"),
            ],
        ),
        (
            TeamDetails::new("Royals", "Gamma University", "V. Shah", "T. Ghosh"),
            vec![player("V. Shah", "G21CE05", "CIVIL", "B", "3")],
        ),
    ]
}

/// Insert the sample registrations into `store`
pub async fn load_seed_data<S: Store>(store: &S) -> Result<()> {
    let teams = sample_teams();
    let count = teams.len();
    for (details, players) in teams {
        store.insert_team(details, players).await?;
    }
    info!("Seeded {} teams", count);
    Ok(())
}
