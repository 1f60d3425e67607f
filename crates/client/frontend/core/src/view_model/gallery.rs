//! Species gallery snapshot.
use client_catalog::Species;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GalleryEntry {
    pub id: String,
    pub name: String,
    pub sprite_url: String,
}

/// Species listing, or the reason it could not be loaded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryView {
    pub entries: Vec<GalleryEntry>,
    pub error: Option<String>,
}

impl GalleryView {
    pub fn from_species(species: &[Species]) -> Self {
        Self {
            entries: species
                .iter()
                .map(|s| GalleryEntry {
                    id: s.id.clone(),
                    name: s.name.clone(),
                    sprite_url: s.sprite_url.clone(),
                })
                .collect(),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            entries: Vec::new(),
            error: Some(error.into()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn rows(&self, columns: usize) -> impl Iterator<Item = &[GalleryEntry]> {
        self.entries.chunks(columns.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entries_keep_catalog_order() {
        let species: Vec<_> = [("bulbasaur", "1"), ("pikachu", "25")]
            .into_iter()
            .map(|(name, id)| Species {
                id: id.into(),
                name: name.into(),
                detail_url: format!("https://pokeapi.co/api/v2/pokemon/{id}/"),
                sprite_url: format!("https://sprites.test/{id}.svg"),
            })
            .collect();

        let gallery = GalleryView::from_species(&species);
        assert!(gallery.error.is_none());
        assert_eq!(gallery.entries[1].name, "pikachu");
        assert_eq!(gallery.entries[1].sprite_url, "https://sprites.test/25.svg");
        assert_eq!(gallery.rows(5).count(), 1);
    }

    #[test]
    fn failure_has_no_entries() {
        let gallery = GalleryView::failed("request timed out");
        assert!(gallery.is_empty());
        assert_eq!(gallery.error.as_deref(), Some("request timed out"));
    }
}
