use super::Product;
use crate::domain::common::RecordId;

fn product(
    id: &str,
    title: &str,
    description: &str,
    price: f64,
    rating: f64,
    image: &str,
    category: &str,
    stock: u32,
    is_favorite: bool,
) -> Product {
    Product {
        id: RecordId::new(id),
        title: title.into(),
        description: description.into(),
        price,
        rating,
        image: image.into(),
        category: category.into(),
        stock,
        is_favorite,
    }
}

pub fn products() -> Vec<Product> {
    vec![
        product(
            "1",
            "Canapé en tissu",
            "Canapé confortable 3 places avec housse lavable",
            799.99,
            4.5,
            "/canape-tissu.png",
            "Meubles",
            12,
            true,
        ),
        product(
            "2",
            "Table à manger",
            "Table en bois massif pouvant accueillir jusqu’à 6 personnes",
            499.99,
            4.2,
            "/table-bois.png",
            "Meubles",
            8,
            false,
        ),
        product(
            "3",
            "Chaise de salon",
            "Chaise ergonomique avec coussin rembourré",
            89.99,
            4.8,
            "/chaise-salon.png",
            "Meubles",
            40,
            true,
        ),
        product(
            "4",
            "Lampe de chevet",
            "Lampe moderne avec variateur de luminosité",
            39.99,
            4.0,
            "/lampe-chevet.png",
            "Décoration",
            60,
            false,
        ),
        product(
            "5",
            "Buffet en chêne",
            "Buffet spacieux avec 3 tiroirs et 2 portes",
            649.99,
            4.3,
            "/buffet-chene.png",
            "Meubles",
            5,
            false,
        ),
    ]
}
