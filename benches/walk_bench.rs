use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rasa::app::state::LibraryBrowser;
use rasa::library::Library;

/// 1000 albums of 100 songs each.
fn big_library() -> Library {
    let mut lib = Library::new("music", "/music");
    let root = lib.root();
    for a in 0..1000 {
        let album = lib.add_directory(root, &format!("Album {:04}", a));
        for s in 0..100 {
            lib.add_song(album, &format!("{:03} track.flac", s));
        }
    }
    lib
}

fn bench_render(c: &mut Criterion) {
    let lib = big_library();

    let mut top = LibraryBrowser::new();
    top.reset(Some(&lib));
    c.bench_function("render_top_of_library", |b| {
        b.iter(|| black_box(top.render(Some(&lib), 40)))
    });

    // Deep in the list, with an album expanded.
    let mut deep = LibraryBrowser::new();
    deep.reset(Some(&lib));
    for _ in 0..900 {
        deep.move_next();
    }
    deep.activate(&lib);
    c.bench_function("render_deep_song_mode", |b| {
        b.iter(|| black_box(deep.render(Some(&lib), 40)))
    });
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
