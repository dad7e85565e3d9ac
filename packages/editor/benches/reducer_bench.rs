use criterion::{black_box, criterion_group, criterion_main, Criterion};
use pagekit_editor::{reduce, reduce_in_place, EditorAction, EditorState, Element, ElementKind};

/// A page with `sections` containers of `per_section` text leaves each
fn populated_state(sections: usize, per_section: usize) -> EditorState {
    let children = (0..sections)
        .map(|s| {
            Element::container(format!("section-{}", s), "Section", ElementKind::Section).with_children(
                (0..per_section)
                    .map(|t| Element::leaf(format!("text-{}-{}", s, t), "Text", ElementKind::Text))
                    .collect(),
            )
        })
        .collect();

    reduce(
        &EditorState::new(),
        &EditorAction::LoadDocument {
            elements: Some(vec![Element::body().with_children(children)]),
            live: false,
        },
    )
    .unwrap()
}

fn insert_into_medium_page(c: &mut Criterion) {
    let state = populated_state(20, 10);
    let action = EditorAction::insert("section-19", Element::leaf("new-text", "Text", ElementKind::Text));

    c.bench_function("insert_into_medium_page", |b| {
        b.iter(|| reduce(black_box(&state), black_box(&action)))
    });
}

fn update_in_medium_page(c: &mut Criterion) {
    let state = populated_state(20, 10);
    let action = EditorAction::update(
        Element::leaf("text-10-5", "Text", ElementKind::Text).with_style("color", "red"),
    );

    c.bench_function("update_in_medium_page", |b| {
        b.iter(|| reduce(black_box(&state), black_box(&action)))
    });
}

fn undo_with_long_history(c: &mut Criterion) {
    let mut state = populated_state(5, 5);
    for i in 0..200 {
        let extra = Element::leaf(format!("extra-{}", i), "Text", ElementKind::Text);
        reduce_in_place(&mut state, &EditorAction::insert("section-0", extra)).unwrap();
    }

    // Undo then redo so every iteration starts from the same cursor
    c.bench_function("undo_with_long_history", |b| {
        b.iter(|| {
            reduce_in_place(black_box(&mut state), &EditorAction::Undo).unwrap();
            reduce_in_place(black_box(&mut state), &EditorAction::Redo).unwrap();
        })
    });
}

criterion_group!(
    benches,
    insert_into_medium_page,
    update_in_medium_page,
    undo_with_long_history
);
criterion_main!(benches);
