use std::collections::HashMap;
use thiserror::Error;

use crate::content::{Project, ProjectId};

pub const PLACEHOLDER_IMAGE: &str = "/placeholder.svg";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error("Project {0} has no images")]
    NoImages(ProjectId),
    #[error("Image {index} is out of range for project {id} ({count} images)")]
    IndexOutOfRange {
        id: ProjectId,
        index: usize,
        count: usize,
    },
}

/// Which image each project card is currently showing.
///
/// Sparse: projects the visitor never touched have no entry and show their
/// first image. Entries are only ever upserted; the whole store is dropped
/// with the gallery.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GalleryState {
    selected: HashMap<ProjectId, usize>,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `index` as the selected image for `project`.
    ///
    /// Out-of-range indices and projects without images are ignored, so every
    /// stored index is valid for the image list it was selected from.
    pub fn select_image(&mut self, project: &Project, index: usize) {
        if let Err(e) = self.try_select(project, index) {
            log::warn!("ignoring selection: {e}");
        }
    }

    /// Bounds-checked selection. Leaves the store untouched on error.
    pub fn try_select(&mut self, project: &Project, index: usize) -> Result<(), GalleryError> {
        let count = project.image_urls.len();
        if count == 0 {
            return Err(GalleryError::NoImages(project.id));
        }
        if index >= count {
            return Err(GalleryError::IndexOutOfRange {
                id: project.id,
                index,
                count,
            });
        }
        self.selected.insert(project.id, index);
        Ok(())
    }

    /// Selected index for `id`, falling back to 0 when nothing was recorded
    /// or when the recorded index no longer fits `image_count`.
    pub fn selected_index(&self, id: ProjectId, image_count: usize) -> usize {
        self.selected
            .get(&id)
            .copied()
            .filter(|&i| i < image_count)
            .unwrap_or(0)
    }

    pub fn display_image<'a>(&self, project: &'a Project) -> &'a str {
        let index = self.selected_index(project.id, project.image_urls.len());
        project
            .image_urls
            .get(index)
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// "N / total" badge text. Single-image projects don't show one.
    pub fn counter(&self, project: &Project) -> Option<String> {
        let count = project.image_urls.len();
        if count <= 1 {
            return None;
        }
        let index = self.selected_index(project.id, count);
        Some(format!("{} / {}", index + 1, count))
    }

    pub fn is_selected(&self, project: &Project, index: usize) -> bool {
        self.selected_index(project.id, project.image_urls.len()) == index
    }

    /// Number of projects the visitor has interacted with.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: u32, images: &[&str]) -> Project {
        Project {
            id: ProjectId(id),
            title: format!("Project {id}"),
            description: "desc".to_string(),
            image_urls: images.iter().map(|s| s.to_string()).collect(),
            tags: vec!["Rust".to_string()],
            link: "https://example.com".to_string(),
        }
    }

    #[test]
    fn test_defaults_to_first_image() {
        let gallery = GalleryState::new();
        let p = project(1, &["a", "b", "c"]);

        assert_eq!(gallery.selected_index(p.id, 3), 0);
        assert_eq!(gallery.display_image(&p), "a");
        assert!(gallery.is_empty());
    }

    #[test]
    fn test_select_and_display() {
        let mut gallery = GalleryState::new();
        let p = project(1, &["a", "b", "c"]);

        assert_eq!(gallery.display_image(&p), "a");
        gallery.select_image(&p, 2);
        assert_eq!(gallery.display_image(&p), "c");
        assert_eq!(gallery.selected_index(p.id, 3), 2);
        assert!(gallery.is_selected(&p, 2));
        assert!(!gallery.is_selected(&p, 0));
    }

    #[test]
    fn test_every_valid_index_round_trips() {
        let mut gallery = GalleryState::new();
        let p = project(7, &["a", "b", "c", "d"]);
        for i in 0..p.image_urls.len() {
            gallery.select_image(&p, i);
            assert_eq!(gallery.selected_index(p.id, p.image_urls.len()), i);
        }
        assert_eq!(gallery.len(), 1);
    }

    #[test]
    fn test_selections_are_per_project() {
        let mut gallery = GalleryState::new();
        let first = project(1, &["a", "b", "c"]);
        let second = project(2, &["x", "y"]);

        gallery.select_image(&first, 1);
        assert_eq!(gallery.selected_index(second.id, 2), 0);

        gallery.select_image(&second, 1);
        assert_eq!(gallery.selected_index(first.id, 3), 1);
        assert_eq!(gallery.selected_index(second.id, 2), 1);
        assert_eq!(gallery.display_image(&first), "b");
        assert_eq!(gallery.display_image(&second), "y");
        assert_eq!(gallery.len(), 2);
    }

    #[test]
    fn test_reselect_is_idempotent() {
        let p = project(3, &["a", "b"]);
        let mut once = GalleryState::new();
        once.select_image(&p, 1);

        let mut twice = GalleryState::new();
        twice.select_image(&p, 1);
        twice.select_image(&p, 1);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_single_image_project() {
        let mut gallery = GalleryState::new();
        let p = project(4, &["only"]);

        assert_eq!(gallery.selected_index(p.id, 1), 0);
        assert_eq!(gallery.counter(&p), None);
        gallery.try_select(&p, 0).unwrap();
        assert_eq!(gallery.display_image(&p), "only");
    }

    #[test]
    fn test_stale_selection_clamps_to_first() {
        let mut gallery = GalleryState::new();
        let p = project(1, &["a", "b", "c"]);
        gallery.select_image(&p, 2);

        // image list shrinks between renders
        let shrunk = project(1, &["a", "b"]);
        assert_eq!(gallery.selected_index(shrunk.id, 2), 0);
        assert_eq!(gallery.display_image(&shrunk), "a");
        assert_eq!(gallery.counter(&shrunk), Some("1 / 2".to_string()));
    }

    #[test]
    fn test_unknown_project_defaults() {
        let mut gallery = GalleryState::new();
        gallery.select_image(&project(1, &["a", "b", "c"]), 2);
        assert_eq!(gallery.selected_index(ProjectId(99), 5), 0);
    }

    #[test]
    fn test_empty_project_uses_placeholder() {
        let mut gallery = GalleryState::new();
        let p = project(5, &[]);

        assert_eq!(gallery.display_image(&p), PLACEHOLDER_IMAGE);
        assert_eq!(gallery.try_select(&p, 0), Err(GalleryError::NoImages(p.id)));
        assert!(gallery.is_empty());

        gallery.select_image(&p, 3);
        assert_eq!(gallery.len(), 0);
        assert_eq!(gallery.display_image(&p), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_ignored_selection_does_not_resurface() {
        let mut gallery = GalleryState::new();
        gallery.select_image(&project(9, &[]), 3);

        // the same project later gains images
        let grown = project(9, &["a", "b", "c", "d"]);
        assert!(gallery.is_empty());
        assert_eq!(gallery.display_image(&grown), "a");
        assert_eq!(gallery.counter(&grown), Some("1 / 4".to_string()));
    }

    #[test]
    fn test_out_of_range_select_is_ignored() {
        let mut gallery = GalleryState::new();
        let p = project(2, &["x", "y"]);

        gallery.select_image(&p, 5);
        assert!(gallery.is_empty());

        gallery.select_image(&p, 1);
        gallery.select_image(&p, 2);
        assert_eq!(gallery.selected_index(p.id, 2), 1);
        assert_eq!(gallery.display_image(&p), "y");
    }

    #[test]
    fn test_try_select_rejects_out_of_range() {
        let mut gallery = GalleryState::new();
        let p = project(2, &["x", "y"]);
        gallery.try_select(&p, 1).unwrap();

        let err = gallery.try_select(&p, 2).unwrap_err();
        assert_eq!(
            err,
            GalleryError::IndexOutOfRange {
                id: p.id,
                index: 2,
                count: 2
            }
        );
        // previous selection survives
        assert_eq!(gallery.selected_index(p.id, 2), 1);
    }

    #[test]
    fn test_counter() {
        let mut gallery = GalleryState::new();
        let p = project(1, &["a", "b", "c"]);

        assert_eq!(gallery.counter(&p), Some("1 / 3".to_string()));
        gallery.select_image(&p, 2);
        assert_eq!(gallery.counter(&p), Some("3 / 3".to_string()));
    }
}
