use linguazoo_types::{AnimalCollection, AnimalRecord};

/// Starter zoo used on first launch and by reset.
pub fn seed_collection() -> AnimalCollection {
    [
        ("KUCING", "CAT"),
        ("ANJING", "DOG"),
        ("GAJAH", "ELEPHANT"),
        ("HARIMAU", "TIGER"),
        ("SINGA", "LION"),
        ("MONYET", "MONKEY"),
        ("KELINCI", "RABBIT"),
        ("KUDA", "HORSE"),
        ("AYAM", "CHICKEN"),
        ("BEBEK", "DUCK"),
        ("ULAR", "SNAKE"),
        ("BUAYA", "CROCODILE"),
        ("IKAN", "FISH"),
        ("BURUNG", "BIRD"),
        ("SAPI", "COW"),
        ("KAMBING", "GOAT"),
    ]
    .into_iter()
    .map(|(id, en)| AnimalRecord::new(id, en))
    .collect()
}
