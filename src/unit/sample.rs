// Bundled sample unit used by `start_sample_game()` and the dataset tests.
use super::{Level, Pair, Unit};

const CELL_BASICS: &[(&str, &str)] = &[
    ("Nucleus", "Holds the cell's genetic material"),
    ("Mitochondrion", "Releases energy from food molecules"),
    ("Cell membrane", "Controls what enters and leaves the cell"),
    ("Ribosome", "Builds proteins"),
];

const PLANT_CELLS: &[(&str, &str)] = &[
    ("Chloroplast", "Captures light energy for photosynthesis"),
    ("Cell wall", "Rigid outer layer that supports a plant cell"),
    ("Vacuole", "Stores water and keeps the cell firm"),
    ("Cytoplasm", "Gel in which the organelles are suspended"),
    ("Stoma", "Leaf pore that lets gases in and out"),
];

const ORGANIZATION: &[(&str, &str)] = &[
    ("Tissue", "Group of similar cells doing one job"),
    ("Organ", "Several tissues working together"),
    ("Organ system", "Organs cooperating on a body function"),
    ("Organism", "A complete living thing"),
];

fn level(name: &str, pairs: &[(&str, &str)]) -> Level {
    Level {
        name: name.to_string(),
        pairs: pairs.iter().map(|(c, d)| Pair::new(*c, *d)).collect(),
    }
}

pub fn sample_unit() -> Unit {
    Unit {
        name: "The Cell".to_string(),
        intro: "Drag every concept onto the explanation that matches it.".to_string(),
        levels: vec![
            level("Level 1: Cell basics", CELL_BASICS),
            level("Level 2: Plant cells", PLANT_CELLS),
            level("Level 3: Levels of organization", ORGANIZATION),
        ],
    }
}
