//! Clause composition for enriched prompts.
//!
//! The rules run in a fixed order and push fixed clause strings into an
//! ordered list; the order of the rules is the order of the output clauses,
//! so it must not be rearranged.

use crate::enrich::classifier::CategoryFlags;

const CARD_FESTIVE: &str = "diseño festivo y atractivo para invitación";
const CARD_TYPOGRAPHY: &str = "con tipografía clara y legible destacando el nombre";
const SPORTS_THEME: &str = "con elementos temáticos deportivos y colores vibrantes";
const SPORTS_DYNAMIC: &str = "diseño dinámico y energético";
const CHARACTER_DETAIL: &str = "con detalles faciales expresivos y proporciones bien definidas";
const STYLE_SHADING: &str = "con líneas suaves y sombreado profesional";
const SCENE_DEPTH: &str = "con elementos de profundidad y composición equilibrada";
const COLOR_HARMONY: &str = "con paleta cromática armoniosa y contrastes apropiados";
const ANIMAL_ANATOMY: &str = "con características anatómicas realistas y expresión natural";
const OBJECT_TEXTURE: &str = "con texturas detalladas y iluminación realista";
const TEXT_TYPOGRAPHY: &str = "con tipografía legible y bien integrada en la composición";
const GENERIC_QUALITY: &str = "con alta calidad visual y detalles nítidos";
const GENERIC_COMPOSITION: &str = "con composición profesional y iluminación equilibrada";
const UNIVERSAL_RESOLUTION: &str = "renderizado en alta resolución";
const UNIVERSAL_STYLE: &str = "estilo artístico refinado";

/// Build the enriched prompt from the original text and its category flags.
///
/// The original prompt is always a strict prefix of the result; the clause
/// list is never empty (a generic pair fills in when nothing matched, and
/// two universal clauses close it out unconditionally).
pub fn compose(original: &str, flags: &CategoryFlags) -> String {
    let mut clauses: Vec<&'static str> = Vec::new();

    if flags.is_card {
        clauses.push(CARD_FESTIVE);
        if flags.has_name || flags.has_text_request {
            clauses.push(CARD_TYPOGRAPHY);
        }
    }

    if flags.is_sports {
        clauses.push(SPORTS_THEME);
        clauses.push(SPORTS_DYNAMIC);
    }

    if flags.has_character {
        clauses.push(CHARACTER_DETAIL);
    }

    if flags.has_style || flags.is_animated {
        clauses.push(STYLE_SHADING);
    }

    if flags.has_scene || flags.is_place {
        clauses.push(SCENE_DEPTH);
    }

    if flags.has_color {
        clauses.push(COLOR_HARMONY);
    }

    if flags.is_animal {
        clauses.push(ANIMAL_ANATOMY);
    }

    if flags.is_object {
        clauses.push(OBJECT_TEXTURE);
    }

    // The card rule already covers typography; avoid giving the model the
    // same guidance twice.
    if flags.has_text_request && !flags.is_card {
        clauses.push(TEXT_TYPOGRAPHY);
    }

    if clauses.is_empty() {
        clauses.push(GENERIC_QUALITY);
        clauses.push(GENERIC_COMPOSITION);
    }

    clauses.push(UNIVERSAL_RESOLUTION);
    clauses.push(UNIVERSAL_STYLE);

    format!("{}, {}.", original, clauses.join(", "))
}
