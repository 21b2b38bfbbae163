//! Fixture trees shared by the unit tests.

use crate::library::{Library, TreeProvider};

/// Album0..Album2 under /music, each holding "01 a.mp3" and "02 b.mp3".
pub fn three_albums() -> Library {
    let mut lib = Library::new("music", "/music");
    let root = lib.root();
    for i in 0..3 {
        let album = lib.add_directory(root, &format!("Album{}", i));
        lib.add_song(album, "01 a.mp3");
        lib.add_song(album, "02 b.mp3");
    }
    lib
}

/// Artist/{AlbumA/{a1,a2}, AlbumB/{b1}} plus a loose top-level song.
pub fn nested_library() -> Library {
    let mut lib = Library::new("music", "/music");
    let root = lib.root();
    let artist = lib.add_directory(root, "Artist");
    let a = lib.add_directory(artist, "AlbumA");
    lib.add_song(a, "a1.mp3");
    lib.add_song(a, "a2.mp3");
    let b = lib.add_directory(artist, "AlbumB");
    lib.add_song(b, "b1.ogg");
    lib.add_song(root, "loose.mp3");
    lib
}

pub fn wide_library(dirs: usize, songs_per_dir: usize) -> Library {
    let mut lib = Library::new("music", "/music");
    let root = lib.root();
    for d in 0..dirs {
        let dir = lib.add_directory(root, &format!("Dir{:04}", d));
        for s in 0..songs_per_dir {
            lib.add_song(dir, &format!("{:03}.flac", s));
        }
    }
    lib
}

/// Hands out clones of a prepared tree.
pub struct FixedProvider(pub Library);

impl TreeProvider for FixedProvider {
    fn load(&self) -> anyhow::Result<Library> {
        Ok(self.0.clone())
    }
}
