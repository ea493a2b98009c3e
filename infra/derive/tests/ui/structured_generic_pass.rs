use squadup_structs::Structured;

#[derive(Structured)]
pub struct Envelope<T> {
    #[field(tag = "kind")]
    pub kind: &'static str,
    #[field(embed, tag = ",omitempty")]
    pub payload: Option<T>,
}

#[derive(Structured)]
pub struct Payload {
    pub value: u32,
}

fn main() {
    let envelope = Envelope { kind: "demo", payload: Some(Payload { value: 7 }) };
    assert_eq!(envelope.type_name(), "Envelope");
    assert_eq!(envelope.fields().len(), 2);
}
