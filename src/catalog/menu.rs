//! The drinks menu.
//!
//! Prices are kept in cents so the whole table can be a `static`; callers get
//! them back as [`Decimal`].

use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Softdrinks,
    Bier,
    Wein,
    Kurze,
    Glaeser,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Softdrinks,
        Category::Bier,
        Category::Wein,
        Category::Kurze,
        Category::Glaeser,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Category::Softdrinks => "softdrinks",
            Category::Bier => "bier",
            Category::Wein => "wein",
            Category::Kurze => "kurze",
            Category::Glaeser => "glaeser",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Softdrinks => "Softdrinks",
            Category::Bier => "Bier",
            Category::Wein => "Wein & Sekt",
            Category::Kurze => "Kurze",
            Category::Glaeser => "Gläser",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Category::Softdrinks => "🥤",
            Category::Bier => "🍺",
            Category::Wein => "🍷",
            Category::Kurze | Category::Glaeser => "🥃",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub id: &'static str,
    pub name: &'static str,
    pub emoji: &'static str,
    pub price_cents: u32,
    pub size: Option<&'static str>,
    pub category: Category,
    pub is_popular: bool,
    pub is_premium: bool,
    pub description: Option<&'static str>,
}

impl MenuItem {
    pub fn price(&self) -> Decimal {
        Decimal::new(i64::from(self.price_cents), 2)
    }
}

const fn item(
    id: &'static str,
    name: &'static str,
    emoji: &'static str,
    price_cents: u32,
    category: Category,
) -> MenuItem {
    MenuItem {
        id,
        name,
        emoji,
        price_cents,
        size: None,
        category,
        is_popular: false,
        is_premium: false,
        description: None,
    }
}

impl MenuItem {
    const fn size(mut self, size: &'static str) -> Self {
        self.size = Some(size);
        self
    }

    const fn popular(mut self) -> Self {
        self.is_popular = true;
        self
    }

    const fn premium(mut self) -> Self {
        self.is_premium = true;
        self
    }

    const fn described(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

use Category::*;

static MENU: [MenuItem; 31] = [
    item("cola", "Cola", "🥤", 250, Softdrinks).size("0,2l").popular(),
    item("cola-zero", "Cola Zero", "🥤", 250, Softdrinks).size("0,2l"),
    item("limo", "Limo", "🍋", 250, Softdrinks).size("0,2l"),
    item("apfelschorle", "Apfelschorle", "🍎", 250, Softdrinks).size("0,2l").popular(),
    item("wasser", "Wasser", "💧", 250, Softdrinks).size("0,2l").popular(),
    item("flasche-wasser", "Flasche Wasser", "💧", 500, Softdrinks)
        .size("0,75l")
        .premium()
        .described("Für den ganzen Tisch"),
    item("flasche-cola", "Flasche Cola", "🍾", 600, Softdrinks)
        .size("1,0l")
        .premium()
        .described("Zum Teilen"),
    item("flasche-limo", "Flasche Limo", "🍾", 600, Softdrinks)
        .size("1,0l")
        .premium()
        .described("Zum Teilen"),
    item("pils", "Pils", "🍺", 300, Bier).size("0,33l").popular(),
    item("koelsch", "Kölsch", "🍺", 300, Bier).size("0,33l").popular(),
    item("radler-00", "Radler 0,0%", "🍺", 300, Bier).size("0,33l"),
    item("kiste-bier-bitburger", "Kiste Bitburger", "📦", 6000, Bier)
        .premium()
        .described("24 Flaschen Bitburger"),
    item("kiste-bier-koelsch", "Kiste Kölsch", "📦", 6000, Bier)
        .premium()
        .described("24 Flaschen Kölsch"),
    item("kiste-bier-gemischt", "Kiste Gemischt", "📦", 6000, Bier)
        .premium()
        .described("10 Bitburger, 10 Kölsch, 4 Radler 0,0%"),
    item("glas-wein-blanc", "Glas Blanc de noir", "🍷", 600, Wein)
        .size("0,2l")
        .described("trocken"),
    item("glas-wein-weissburgunder", "Glas Weißburgunder", "🍷", 600, Wein)
        .size("0,2l")
        .described("trocken"),
    item("glas-wein-jubilus", "Glas Jubilus", "🍷", 600, Wein)
        .size("0,2l")
        .described("feinherb"),
    item("flasche-wein-blanc", "Flasche Blanc de noir", "🍾", 2000, Wein)
        .premium()
        .described("trocken"),
    item("flasche-wein-weissburgunder", "Flasche Weißburgunder", "🍾", 2000, Wein)
        .premium()
        .described("trocken"),
    item("flasche-wein-jubilus", "Flasche Jubilus", "🍾", 2000, Wein)
        .premium()
        .described("feinherb"),
    item("glas-secco", "Glas Secco", "🥂", 600, Wein).size("0,2l").popular(),
    item("flasche-secco", "Flasche Secco", "🍾", 1800, Wein).premium(),
    item("luftikuss", "LuftiKuss", "🍾", 2000, Wein)
        .premium()
        .described("Alkoholfreier Sekt"),
    item("berliner-luft", "Berliner Luft", "🧊", 300, Kurze).popular(),
    item("baerbelchen", "Bärbelchen", "🍬", 300, Kurze),
    item("glitter-pitter", "Glitter Pitter", "✨", 300, Kurze),
    item("kiste-klopfer-berliner", "Kiste Berliner Luft", "📦", 5000, Kurze).premium(),
    item("kiste-klopfer-baerbelchen", "Kiste Bärbelchen", "📦", 5000, Kurze).premium(),
    item("kiste-klopfer-glitter", "Kiste Glitter Pitter", "📦", 5000, Kurze).premium(),
    item("glas-normal", "Glas (leer)", "🥃", 0, Glaeser),
    item("glas-wein-leer", "Weinglas (leer)", "🍷", 0, Glaeser),
];

pub fn menu_items() -> &'static [MenuItem] {
    &MENU
}

pub fn item_by_id(id: &str) -> Option<&'static MenuItem> {
    MENU.iter().find(|item| item.id == id)
}

pub fn items_in(category: Category) -> impl Iterator<Item = &'static MenuItem> {
    MENU.iter().filter(move |item| item.category == category)
}

/// Quick-access items.
pub fn popular_items() -> impl Iterator<Item = &'static MenuItem> {
    MENU.iter().filter(|item| item.is_popular)
}

/// Bottles and crates for the whole table.
pub fn premium_items() -> impl Iterator<Item = &'static MenuItem> {
    MENU.iter().filter(|item| item.is_premium)
}

/// German price format: `2,50 €`.
pub fn format_price(price: Decimal) -> String {
    format!("{:.2} €", price.round_dp(2)).replace('.', ",")
}
