// src/cli/console.rs — Console presenter
//
// Terminal rendition of the presentation seam: notices go to
// stdout/stderr, saved files land in the downloads directory.

use std::path::PathBuf;

use crate::core::presenter::{NoticeLevel, Presenter};
use crate::infra::errors::ChemvizError;

pub struct ConsolePresenter {
    download_dir: PathBuf,
}

impl ConsolePresenter {
    pub fn new(download_dir: PathBuf) -> Self {
        Self { download_dir }
    }
}

impl Presenter for ConsolePresenter {
    fn notify(&self, level: NoticeLevel, message: &str) {
        match level {
            NoticeLevel::Warning => eprintln!("warning: {message}"),
            NoticeLevel::Error => eprintln!("error: {message}"),
            NoticeLevel::Info | NoticeLevel::Success => println!("{message}"),
        }
    }

    // A terminal has no viewport to reset.
    fn scroll_to_top(&self) {}

    fn save_file(&self, filename: &str, bytes: &[u8]) -> Result<(), ChemvizError> {
        std::fs::create_dir_all(&self.download_dir)?;
        let path = self.download_dir.join(filename);
        std::fs::write(&path, bytes)?;
        println!("Saved {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_file_writes_into_download_dir() {
        let dir = tempdir().unwrap();
        let presenter = ConsolePresenter::new(dir.path().join("reports"));
        presenter.save_file("report_plant_a.pdf", b"%PDF-").unwrap();

        let written = std::fs::read(dir.path().join("reports/report_plant_a.pdf")).unwrap();
        assert_eq!(written, b"%PDF-");
    }
}
