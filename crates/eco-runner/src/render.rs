//! Plain-text rendering of the animal layer.

use eco_world::FieldView;
use eco_core::Location;

/// One line per row: a species glyph per animal, `*` for a bare plant,
/// `.` for an empty cell
pub fn render_text(view: &FieldView<'_>) -> String {
    let mut out = String::with_capacity((view.width() + 1) * view.depth());
    for row in 0..view.depth() {
        for col in 0..view.width() {
            let location = Location::new(row, col);
            let glyph = match view.species_at(location) {
                Some(species) => species.glyph(),
                None if view.has_plant(location) => '*',
                None => '.',
            };
            out.push(glyph);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use eco_core::{Gender, Species};
    use eco_world::Ecosystem;

    #[test]
    fn test_render_glyphs() {
        let mut eco = Ecosystem::new(2, 3);
        eco.spawn_animal(Species::Eagle, Gender::Male, 0, 1, Location::new(0, 0))
            .unwrap();
        eco.spawn_animal(Species::Squirrel, Gender::Male, 0, 1, Location::new(1, 2))
            .unwrap();
        eco.spawn_plant(0, Location::new(0, 1)).unwrap();
        eco.spawn_plant(0, Location::new(0, 0)).unwrap();

        let text = render_text(&FieldView::new(0, &eco));
        assert_eq!(text, "E*.\n..q\n");
    }
}
