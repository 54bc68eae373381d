//! Bubble tints and the words revealed when a bubble pops

use crate::rng::Rng;

/// Pale "liquid glass" tints a bubble is filled with
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Tint {
    Frost,
    Crystal,
    Pearl,
    Ice,
    Mist,
}

impl Tint {
    pub const ALL: [Tint; 5] = [Tint::Frost, Tint::Crystal, Tint::Pearl, Tint::Ice, Tint::Mist];

    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Tint::Frost => (240, 245, 250),
            Tint::Crystal => (245, 248, 252),
            Tint::Pearl => (250, 250, 255),
            Tint::Ice => (235, 242, 250),
            Tint::Mist => (242, 246, 250),
        }
    }

    pub fn random(rng: &mut Rng) -> Self {
        *rng.pick(&Self::ALL)
    }
}

/// Values shown by the hero section, one per popped bubble
pub const VOCABULARY: [&str; 20] = [
    "Higiene",
    "Confianza",
    "Frescura",
    "Cuidado",
    "Calidad",
    "Profesionalismo",
    "Excelencia",
    "Limpieza",
    "Impecable",
    "Orden",
    "Compromiso",
    "Detalle",
    "Eficiencia",
    "Transparencia",
    "Dedicación",
    "Integridad",
    "Pulcritud",
    "Responsabilidad",
    "Perfección",
    "Desinfección",
];

pub fn random_word(rng: &mut Rng) -> &'static str {
    *rng.pick(&VOCABULARY)
}
