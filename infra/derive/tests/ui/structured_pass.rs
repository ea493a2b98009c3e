use squadup_structs::Structured;

#[derive(Structured)]
pub struct Metadata {
    #[field(tag = "created_at")]
    pub created_at: i64,
}

#[derive(Structured)]
pub struct Account {
    #[field(embed)]
    pub meta: Metadata,
    #[field(tag = "name,omitempty")]
    pub name: String,
    #[field(tag = "-")]
    pub secret: String,
    pub r#type: u8,
    internal: bool,
}

#[derive(Structured)]
pub struct Marker;

fn main() {
    let account = Account {
        meta: Metadata { created_at: 1 },
        name: String::new(),
        secret: "hidden".to_owned(),
        r#type: 2,
        internal: true,
    };
    assert!(account.internal);
    assert_eq!(account.fields().len(), 5);
    assert!(Marker.fields().is_empty());
}
