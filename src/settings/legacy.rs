use super::Settings;
use std::fs;
use std::path::Path;

/// Older versions kept only the last queried city, as plain text in the home
/// directory. Returns settings carrying that city, or `None` when the file is
/// missing or blank.
pub fn try_migrate_legacy_city(path: &Path) -> Option<Settings> {
    let content = fs::read_to_string(path).ok()?;
    let city = content.trim();
    if city.is_empty() {
        return None;
    }

    log::info!("Migrating city {:?} from {}", city, path.display());
    Some(Settings {
        city: city.to_string(),
        ..Settings::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_missing_file() {
        let path = env::temp_dir().join("namaz_legacy_missing.txt");
        let _ = fs::remove_file(&path);
        assert!(try_migrate_legacy_city(&path).is_none());
    }

    #[test]
    fn test_blank_file() {
        let path = env::temp_dir().join("namaz_legacy_blank.txt");
        fs::write(&path, "  \n").unwrap();
        assert!(try_migrate_legacy_city(&path).is_none());
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_city_is_trimmed() {
        let path = env::temp_dir().join("namaz_legacy_city.txt");
        fs::write(&path, "  Kayseri \n").unwrap();
        assert_eq!(try_migrate_legacy_city(&path).unwrap().city, "Kayseri");
        let _ = fs::remove_file(&path);
    }
}
