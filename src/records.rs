use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::pagination::ItemsPerPage;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub name: String,
    pub team: String,
    pub position: String,
    #[serde(default)]
    pub games: u32,
    #[serde(default)]
    pub points: u32,
}

/// Column headers, in render order.
pub const COLUMNS: [&str; 5] = ["Name", "Team", "Pos", "GP", "Pts"];

impl PlayerRecord {
    pub fn cells(&self) -> [String; 5] {
        [
            self.name.clone(),
            self.team.clone(),
            self.position.clone(),
            self.games.to_string(),
            self.points.to_string(),
        ]
    }
}

pub fn load_records(path: &Path) -> Result<Vec<PlayerRecord>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read records file {}", path.display()))?;
    let records: Vec<PlayerRecord> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse records file {}", path.display()))?;
    info!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

const FIRST_NAMES: [&str; 8] = [
    "Alex", "Jordan", "Casey", "Riley", "Morgan", "Taylor", "Jamie", "Quinn",
];
const LAST_NAMES: [&str; 6] = ["Baird", "Hughes", "Larsen", "Okafor", "Petrov", "Silva"];
const TEAMS: [&str; 4] = ["VAN", "TOR", "EDM", "MTL"];
const POSITIONS: [&str; 4] = ["C", "LW", "RW", "D"];

/// Deterministic demo roster of `count` players.
pub fn sample_records(count: usize) -> Vec<PlayerRecord> {
    (0..count).map(sample_record).collect()
}

fn sample_record(i: usize) -> PlayerRecord {
    PlayerRecord {
        name: format!(
            "{} {}",
            FIRST_NAMES[i % FIRST_NAMES.len()],
            LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()]
        ),
        team: TEAMS[i % TEAMS.len()].to_string(),
        position: POSITIONS[(i / 2) % POSITIONS.len()].to_string(),
        games: 40 + ((i % 43) * 7 % 43) as u32,
        points: ((i % 97) * 13 % 97) as u32,
    }
}

pub fn total_pages(total_items: usize, items_per_page: ItemsPerPage) -> usize {
    total_items.div_ceil(items_per_page.value())
}

/// Records on the 1-based `page`. Pages outside the data give an empty slice.
pub fn page_slice(
    records: &[PlayerRecord],
    page: usize,
    items_per_page: ItemsPerPage,
) -> &[PlayerRecord] {
    let per_page = items_per_page.value();
    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(per_page)) else {
        return &[];
    };
    if start >= records.len() {
        return &[];
    }
    let end = (start + per_page).min(records.len());
    &records[start..end]
}

/// 1-based inclusive range of the rows on `page`, `None` when it is empty.
pub fn page_range(
    total_items: usize,
    page: usize,
    items_per_page: ItemsPerPage,
) -> Option<(usize, usize)> {
    let per_page = items_per_page.value();
    let start = page.checked_sub(1)?.checked_mul(per_page)?;
    if start >= total_items {
        return None;
    }
    Some((start + 1, (start + per_page).min(total_items)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn total_pages_is_ceiling_division() {
        assert_eq!(total_pages(0, ItemsPerPage::Ten), 0);
        assert_eq!(total_pages(1, ItemsPerPage::Ten), 1);
        assert_eq!(total_pages(100, ItemsPerPage::Twenty), 5);
        assert_eq!(total_pages(101, ItemsPerPage::Twenty), 6);
        assert_eq!(total_pages(400, ItemsPerPage::Fifty), 8);
    }

    #[test]
    fn slices_pages() {
        let records = sample_records(45);
        assert_eq!(page_slice(&records, 1, ItemsPerPage::Twenty).len(), 20);
        assert_eq!(page_slice(&records, 3, ItemsPerPage::Twenty).len(), 5);
        assert_eq!(page_slice(&records, 3, ItemsPerPage::Twenty)[0], records[40]);
        assert!(page_slice(&records, 4, ItemsPerPage::Twenty).is_empty());
        assert!(page_slice(&records, 0, ItemsPerPage::Twenty).is_empty());
        assert!(page_slice(&records, usize::MAX, ItemsPerPage::Fifty).is_empty());
    }

    #[test]
    fn page_range_reports_rows() {
        assert_eq!(page_range(45, 1, ItemsPerPage::Twenty), Some((1, 20)));
        assert_eq!(page_range(45, 3, ItemsPerPage::Twenty), Some((41, 45)));
        assert_eq!(page_range(45, 4, ItemsPerPage::Twenty), None);
        assert_eq!(page_range(0, 1, ItemsPerPage::Ten), None);
    }

    #[test]
    fn sample_roster_is_deterministic() {
        assert_eq!(sample_records(30), sample_records(30));
        assert_eq!(sample_records(30).len(), 30);
    }

    #[test]
    fn sample_stats_stay_in_range_for_any_index() {
        for i in [0, 42, 43, 96, usize::MAX / 2, usize::MAX] {
            let record = sample_record(i);
            assert!((40..83).contains(&record.games), "index {i}");
            assert!(record.points < 97, "index {i}");
        }
        assert_eq!(sample_record(1).games, 47);
        assert_eq!(sample_record(1).points, 13);
    }

    #[test]
    fn loads_records_from_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"name":"Alex Baird","team":"VAN","position":"C","games":82,"points":71}},
               {{"name":"Quinn Silva","team":"TOR","position":"D"}}]"#
        )
        .unwrap();

        let records = load_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].points, 71);
        assert_eq!(records[1].games, 0);
    }

    #[test]
    fn bad_json_reports_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{not json").unwrap();

        let err = load_records(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse records file"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = load_records(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(err.to_string().contains("Failed to read records file"));
    }
}
