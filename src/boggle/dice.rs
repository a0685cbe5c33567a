use rand::prelude::SliceRandom;
use rand::Rng;

/// Faces of the sixteen standard Boggle cubes
pub const CUBES16: [&str; 16] = [
    "FORIXB", "MOQABJ", "GURILW", "SETUPL", "CMPDAE", "ACITAO", "SLCRAE", "ROMASH", "NODESW",
    "HEFIYE", "ONUDTK", "TEVIGN", "ANEDVZ", "PINESH", "ABILYT", "GKYLEU",
];

/// The letter source for grid generation and mutation
#[derive(Debug, Clone)]
pub struct Dice {
    cubes: Vec<Vec<char>>,
}

impl Default for Dice {
    fn default() -> Self {
        Self {
            cubes: CUBES16.iter().map(|c| c.chars().collect()).collect(),
        }
    }
}

impl Dice {
    /// Rolls `n * n` cubes (reusing the sixteen cubes in turn for larger grids),
    /// shuffles them into place and keeps one face of each
    pub fn roll<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<char> {
        let mut cubes = (0..n * n)
            .map(|i| &self.cubes[i % self.cubes.len()])
            .collect::<Vec<_>>();
        cubes.shuffle(rng);
        cubes
            .into_iter()
            .map(|faces| faces[rng.gen_range(0..faces.len())])
            .collect()
    }

    /// Picks a random cube and then one of its faces
    pub fn draw_letter<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        let faces = &self.cubes[rng.gen_range(0..self.cubes.len())];
        faces[rng.gen_range(0..faces.len())]
    }

    pub fn contains(&self, letter: char) -> bool {
        self.cubes.iter().any(|faces| faces.contains(&letter))
    }
}
