#![allow(dead_code)]

use squadup_structs::Structured;

#[derive(Structured, Clone)]
pub struct Base {
    pub a: String,
    pub b: String,
}

#[derive(Structured, Clone)]
pub struct Parent {
    pub a: String,
    #[field(embed)]
    pub base: Base,
}

/// Same shape as [`Parent`], with the embedded field declared first.
#[derive(Structured)]
pub struct EmbedFirst {
    #[field(embed)]
    pub base: Base,
    pub a: String,
}

/// A parent whose own key equals the embedded field's name.
#[derive(Structured)]
pub struct Conflicting {
    pub a: String,
    #[field(tag = "base")]
    pub label: String,
    #[field(embed)]
    pub base: Base,
}

#[derive(Structured)]
pub struct Level4 {
    pub l4: u32,
}

#[derive(Structured)]
pub struct Level3 {
    pub l3: u32,
    #[field(embed)]
    pub level4: Level4,
}

#[derive(Structured)]
pub struct Level2 {
    pub l2: u32,
    #[field(embed)]
    pub level3: Level3,
}

#[derive(Structured)]
pub struct Level1 {
    pub l1: u32,
    #[field(embed)]
    pub level2: Level2,
}

#[must_use]
pub fn four_levels() -> Level1 {
    Level1 { l1: 1, level2: Level2 { l2: 2, level3: Level3 { l3: 3, level4: Level4 { l4: 4 } } } }
}

/// Self-similar chain used for depth checks; every level is field-less once flattened.
#[derive(Structured)]
pub struct Nest {
    #[field(embed, tag = ",omitempty")]
    pub inner: Option<Box<Nest>>,
}

/// Builds a chain of `depth` nested levels, the outermost included.
#[must_use]
pub fn nest(depth: usize) -> Nest {
    let mut current = Nest { inner: None };
    for _ in 1..depth {
        current = Nest { inner: Some(Box::new(current)) };
    }
    current
}

#[derive(Structured)]
pub struct Tagged {
    #[field(tag = "first_name,omitempty")]
    pub first_name: String,
    #[field(tag = "-")]
    pub password: String,
    #[field(tag = ",omitempty")]
    pub nickname: Option<String>,
    #[field(tag = "mail,string")]
    pub email: String,
    pub r#type: u8,
    #[field(tag = "hidden_tag")]
    secret: String,
}

impl Tagged {
    #[must_use]
    pub fn new(first_name: &str, nickname: Option<&str>) -> Self {
        Self {
            first_name: first_name.to_owned(),
            password: "hunter2".to_owned(),
            nickname: nickname.map(str::to_owned),
            email: "ada@example.com".to_owned(),
            r#type: 2,
            secret: "s3cr3t".to_owned(),
        }
    }
}

#[derive(Structured)]
pub struct Duplicated {
    #[field(tag = "dup")]
    pub first: u8,
    #[field(tag = "dup")]
    pub second: u8,
}

#[derive(Structured)]
pub struct WithPlainEmbed {
    pub id: u32,
    #[field(embed)]
    pub code: u16,
}

#[derive(Structured)]
pub struct IgnoredEmbed {
    pub a: String,
    #[field(embed, tag = "-")]
    pub base: Base,
}

#[derive(Structured)]
pub struct Wrapper {
    pub name: String,
    pub nested: Base,
}

#[derive(Structured)]
pub struct Envelope<T> {
    pub status: String,
    #[field(embed, tag = ",omitempty")]
    pub data: Option<T>,
}

#[must_use]
pub fn parent() -> Parent {
    Parent { a: "a1".to_owned(), base: Base { a: "a2".to_owned(), b: "b2".to_owned() } }
}

#[derive(Structured)]
pub struct StrLeaf {
    #[field(tag = "Str")]
    pub value: String,
}

#[derive(Structured)]
pub struct Around3 {
    #[field(embed)]
    pub leaf: StrLeaf,
}

#[derive(Structured)]
pub struct Around2 {
    #[field(embed)]
    pub around3: Around3,
}

#[derive(Structured)]
pub struct Around1 {
    #[field(embed)]
    pub around2: Around2,
}

/// A single `Str` field buried four levels deep.
#[must_use]
pub fn buried_str() -> Around1 {
    Around1 { around2: Around2 { around3: Around3 { leaf: StrLeaf { value: "x".to_owned() } } } }
}

#[derive(Structured)]
pub struct BSame {
    pub a_field: String,
    pub c_field: String,
    pub d_field: String,
}

/// Shares `a_field` and `c_field` with its embedded [`BSame`].
#[derive(Structured)]
pub struct ASameWithBSame {
    pub a_field: String,
    pub b_field: String,
    pub c_field: String,
    #[field(embed)]
    pub b_same: BSame,
}

#[must_use]
pub fn a_same_with_b_same() -> ASameWithBSame {
    ASameWithBSame {
        a_field: "a".to_owned(),
        b_field: "b".to_owned(),
        c_field: "c".to_owned(),
        b_same: BSame { a_field: "ba".to_owned(), c_field: "bc".to_owned(), d_field: "bd".to_owned() },
    }
}

#[derive(Structured)]
pub struct Mid {
    pub a: String,
    #[field(embed)]
    pub base: Base,
}

#[derive(Structured)]
pub struct Top {
    pub a: String,
    #[field(embed)]
    pub mid: Mid,
}

#[must_use]
pub fn top() -> Top {
    Top { a: "t".to_owned(), mid: Mid { a: "m".to_owned(), base: Base { a: "b".to_owned(), b: "bb".to_owned() } } }
}

#[derive(Structured)]
pub struct DeepWrapper {
    pub nested: Nest,
}
