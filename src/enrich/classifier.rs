//! Keyword classifier for incoming prompts.
//!
//! Each category is a fixed list of trigger substrings; `classify` lower-cases
//! the prompt once and checks every list independently. Matching is plain
//! substring containment, so a trigger inside a longer word also fires
//! (e.g. "automático" trips the sports list via "auto").

/// Character / person mentions.
const CHARACTER_TRIGGERS: &[&str] = &[
    "personaje",
    "character",
    "persona",
    "figura",
    "héroe",
    "protagonista",
    "hombre",
    "mujer",
    "niño",
    "niña",
    "gente",
    "people",
];

/// Art style mentions.
const STYLE_TRIGGERS: &[&str] = &[
    "estilo",
    "style",
    "arte",
    "artistic",
    "diseño",
    "design",
    "realista",
    "cartoon",
    "anime",
];

/// Scene / setting / background mentions.
const SCENE_TRIGGERS: &[&str] = &[
    "fondo",
    "background",
    "escena",
    "ambiente",
    "entorno",
    "lugar",
    "casa",
    "ciudad",
    "bosque",
    "playa",
];

/// Color vocabulary.
const COLOR_TRIGGERS: &[&str] = &[
    "color",
    "bright",
    "oscuro",
    "vivid",
    "palette",
    "tono",
    "rojo",
    "azul",
    "verde",
    "amarillo",
];

/// Quality / resolution vocabulary. Detected but not used by the composer.
const QUALITY_TRIGGERS: &[&str] = &[
    "calidad",
    "quality",
    "resolución",
    "hd",
    "4k",
    "alta",
    "detalle",
];

/// Requests for literal text in the image.
const TEXT_TRIGGERS: &[&str] = &[
    "texto",
    "text",
    "letras",
    "palabras",
    "título",
    "escribir",
    "diga",
    "dice",
    "que diga",
];

/// Animated / cartoon style.
const ANIMATED_TRIGGERS: &[&str] = &[
    "animad",
    "cartoon",
    "anime",
    "dibujo",
    "ilustración",
    "caricatura",
];

/// Inanimate objects.
const OBJECT_TRIGGERS: &[&str] = &["objeto", "cosa", "elemento", "item", "producto"];

/// Animals and pets.
const ANIMAL_TRIGGERS: &[&str] = &[
    "animal",
    "perro",
    "gato",
    "león",
    "pájaro",
    "pez",
    "mascota",
];

/// Places and landscapes.
const PLACE_TRIGGERS: &[&str] = &[
    "lugar",
    "sitio",
    "ubicación",
    "paisaje",
    "montaña",
    "mar",
    "río",
];

/// Invitations and cards.
const CARD_TRIGGERS: &[&str] = &["tarjeta", "invitacion", "invitación", "card", "invitation"];

/// Sports and racing themes.
const SPORTS_TRIGGERS: &[&str] = &[
    "f1",
    "formula",
    "futbol",
    "basketball",
    "deporte",
    "racing",
    "carrera",
    "auto",
    "carro",
];

/// Proper names and explicit text requests.
const NAME_TRIGGERS: &[&str] = &[
    "juan", "david", "maria", "carlos", "sofia", "nombre", "que diga",
];

/// One boolean per recognized category. Every flag is computed independently
/// from the lower-cased prompt text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryFlags {
    pub has_character: bool,
    pub has_style: bool,
    pub has_scene: bool,
    pub has_color: bool,
    pub has_quality: bool,
    pub has_text_request: bool,
    pub is_animated: bool,
    pub is_object: bool,
    pub is_animal: bool,
    pub is_place: bool,
    pub is_card: bool,
    pub is_sports: bool,
    pub has_name: bool,
}

fn contains_any(text: &str, triggers: &[&str]) -> bool {
    triggers.iter().any(|t| text.contains(t))
}

/// Scan a prompt against every category's trigger list.
///
/// Pure function of the input text; an empty prompt yields all-false flags.
pub fn classify(prompt: &str) -> CategoryFlags {
    let text = prompt.to_lowercase();
    CategoryFlags {
        has_character: contains_any(&text, CHARACTER_TRIGGERS),
        has_style: contains_any(&text, STYLE_TRIGGERS),
        has_scene: contains_any(&text, SCENE_TRIGGERS),
        has_color: contains_any(&text, COLOR_TRIGGERS),
        has_quality: contains_any(&text, QUALITY_TRIGGERS),
        has_text_request: contains_any(&text, TEXT_TRIGGERS),
        is_animated: contains_any(&text, ANIMATED_TRIGGERS),
        is_object: contains_any(&text, OBJECT_TRIGGERS),
        is_animal: contains_any(&text, ANIMAL_TRIGGERS),
        is_place: contains_any(&text, PLACE_TRIGGERS),
        is_card: contains_any(&text, CARD_TRIGGERS),
        is_sports: contains_any(&text, SPORTS_TRIGGERS),
        has_name: contains_any(&text, NAME_TRIGGERS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_prompt_sets_no_flags() {
        assert_eq!(classify(""), CategoryFlags::default());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let flags = classify("Un PERRO en la Playa");
        assert!(flags.is_animal);
        assert!(flags.has_scene);
    }

    #[test]
    fn character_triggers() {
        assert!(classify("un héroe medieval").has_character);
        assert!(classify("people dancing").has_character);
        assert!(!classify("una flor").has_character);
    }

    #[test]
    fn style_triggers() {
        assert!(classify("estilo anime").has_style);
        assert!(classify("flat design poster").has_style);
    }

    #[test]
    fn scene_triggers() {
        assert!(classify("fondo de ciudad").has_scene);
        assert!(classify("un bosque encantado").has_scene);
    }

    #[test]
    fn color_triggers() {
        assert!(classify("tonos rojo y azul").has_color);
        assert!(!classify("un gato").has_color);
    }

    #[test]
    fn quality_triggers() {
        assert!(classify("imagen en 4k").has_quality);
        assert!(classify("mucho detalle").has_quality);
    }

    #[test]
    fn text_request_triggers() {
        assert!(classify("que diga feliz día").has_text_request);
        assert!(classify("con letras doradas").has_text_request);
    }

    #[test]
    fn animated_triggers() {
        assert!(classify("dibujo animado").is_animated);
        assert!(classify("una caricatura").is_animated);
    }

    #[test]
    fn object_triggers() {
        assert!(classify("un producto de lujo").is_object);
    }

    #[test]
    fn animal_triggers() {
        assert!(classify("un león rugiendo").is_animal);
        assert!(classify("mi mascota").is_animal);
    }

    #[test]
    fn place_triggers() {
        assert!(classify("paisaje de montaña").is_place);
    }

    #[test]
    fn card_triggers() {
        assert!(classify("tarjeta de cumpleaños").is_card);
        assert!(classify("wedding invitation").is_card);
    }

    #[test]
    fn sports_triggers() {
        assert!(classify("carro de carreras").is_sports);
        assert!(classify("un partido de futbol").is_sports);
    }

    #[test]
    fn name_triggers() {
        assert!(classify("para Juan").has_name);
        assert!(classify("que diga bienvenidos").has_name);
    }

    #[test]
    fn substring_match_fires_inside_longer_words() {
        // "auto" inside "automático"; boundary-free matching is intentional
        assert!(classify("un proceso automático").is_sports);
    }

    #[test]
    fn flags_are_independent() {
        let flags = classify("tarjeta para Juan con letras");
        assert!(flags.is_card);
        assert!(flags.has_name);
        assert!(flags.has_text_request);
        assert!(!flags.is_animal);
        assert!(!flags.is_sports);
    }
}
