use crate::{
    bindings::{BookmarkId, MediaElement, ViewerUi},
    utils::duration::{format_duration, TimeUnit},
    Logger,
};

/// Effect of clicking on an existing bookmark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BookmarkMode {
    /// Clicking a bookmark seeks to it.
    Add,
    /// Clicking a bookmark removes it.
    Remove,
}

/// A saved latency the viewer can go back to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Bookmark {
    id: BookmarkId,
    /// Latency from air at the time the bookmark was saved, in whole seconds.
    offset_seconds: i64,
}

impl Bookmark {
    pub(crate) fn id(&self) -> BookmarkId {
        self.id
    }

    pub(crate) fn offset_seconds(&self) -> i64 {
        self.offset_seconds
    }
}

/// What happened when a bookmark was clicked.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum BookmarkClickResult {
    /// We seeked to the given position, in seconds.
    Seeked(f64),
    /// The bookmark was removed.
    Removed,
    /// The seek position could not be computed (e.g. unknown duration).
    InvalidPosition,
    /// No bookmark has that id.
    NotFound,
}

pub(crate) struct BookmarkManager {
    /// Current bookmarks, oldest first.
    bookmarks: Vec<Bookmark>,
    mode: BookmarkMode,
    next_id: BookmarkId,
}

impl BookmarkManager {
    pub(crate) fn new() -> Self {
        Self {
            bookmarks: vec![],
            mode: BookmarkMode::Add,
            next_id: 0,
        }
    }

    pub(crate) fn mode(&self) -> BookmarkMode {
        self.mode
    }

    pub(crate) fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    /// Save the given "latency from air", in milliseconds, as a new bookmark.
    ///
    /// Saving always goes back to `BookmarkMode::Add`.
    ///
    /// Returns the new bookmark's id, `None` if the latency is not a finite number.
    pub(crate) fn save_bookmark<P>(
        &mut self,
        page: &mut P,
        latency_from_air_ms: f64,
    ) -> Option<BookmarkId>
    where
        P: ViewerUi + ?Sized,
    {
        self.set_mode(page, BookmarkMode::Add);
        if !latency_from_air_ms.is_finite() {
            Logger::warn("Bookmarks: cannot save a non-finite latency");
            return None;
        }
        let offset_seconds = (latency_from_air_ms / 1000.).floor() as i64;
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        let label = format_duration(offset_seconds as f64, TimeUnit::Second, TimeUnit::Second, 0);
        Logger::info(&format!("Bookmarks: saving {label}"));
        page.add_bookmark(id, &label);
        self.bookmarks.push(Bookmark { id, offset_seconds });
        Some(id)
    }

    /// Flip between `BookmarkMode::Add` and `BookmarkMode::Remove`.
    ///
    /// No bookmark is removed by this alone.
    pub(crate) fn toggle_remove_mode<P: ViewerUi + ?Sized>(&mut self, page: &mut P) {
        let new_mode = match self.mode {
            BookmarkMode::Add => BookmarkMode::Remove,
            BookmarkMode::Remove => BookmarkMode::Add,
        };
        self.set_mode(page, new_mode);
    }

    /// Method to call when the bookmark with the given `id` is clicked.
    ///
    /// In `BookmarkMode::Add` we seek back to the bookmarked latency, in
    /// `BookmarkMode::Remove` the bookmark is destroyed.
    pub(crate) fn on_bookmark_clicked<P>(
        &mut self,
        page: &mut P,
        id: BookmarkId,
        transport_latency_ms: f64,
        seek_bias: f64,
    ) -> BookmarkClickResult
    where
        P: MediaElement + ViewerUi + ?Sized,
    {
        let Some(idx) = self.bookmarks.iter().position(|b| b.id == id) else {
            Logger::warn(&format!("Bookmarks: unknown bookmark {id}"));
            return BookmarkClickResult::NotFound;
        };
        match self.mode {
            BookmarkMode::Remove => {
                let removed = self.bookmarks.remove(idx);
                Logger::debug(&format!("Bookmarks: removing {}s", removed.offset_seconds));
                page.remove_bookmark(removed.id);
                BookmarkClickResult::Removed
            }
            BookmarkMode::Add => {
                let offset = self.bookmarks[idx].offset_seconds as f64;
                let position =
                    page.duration() - offset + transport_latency_ms / 1000. + seek_bias;
                if !position.is_finite() {
                    Logger::warn("Bookmarks: cannot seek, position is not a finite number");
                    return BookmarkClickResult::InvalidPosition;
                }
                Logger::debug(&format!("Bookmarks: seeking to {position}"));
                page.seek(position);
                BookmarkClickResult::Seeked(position)
            }
        }
    }

    fn set_mode<P: ViewerUi + ?Sized>(&mut self, page: &mut P, mode: BookmarkMode) {
        if self.mode != mode {
            self.mode = mode;
            page.set_remove_mode_indicator(mode == BookmarkMode::Remove);
        }
    }
}
