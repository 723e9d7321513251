/// read a printout file: one whitespace-separated record per line,
/// blank lines skipped. used for regression decks and their answers.
pub fn read_printout(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>, Error> {
    let text = std::fs::read_to_string(path)?;
    Ok(text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split_whitespace().map(String::from).collect())
        .collect())
}

use crate::error::Error;
use std::path::Path;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_and_blanks() {
        let path = std::env::temp_dir().join("endgames-printout.txt");
        std::fs::write(&path, "r1 y2 g3\n\n  \nb4 p5\n").expect("scratch file");
        let records = read_printout(&path).expect("readable");
        assert!(records.len() == 2);
        assert!(records[0] == vec!["r1", "y2", "g3"]);
        assert!(records[1] == vec!["b4", "p5"]);
    }

    #[test]
    fn missing_file() {
        assert!(read_printout("/no/such/printout.txt").is_err());
    }
}
