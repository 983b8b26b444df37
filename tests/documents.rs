//! Whole-document parsing tests
//!
//! Full forms with fieldsets, atomic fields and choice groups, verified
//! with deep structural assertions on the resulting trees.

use formcode::{parse, Block, Choice, Document, Field, FieldKind, FieldType};

fn field(block: &Block) -> &Field {
    block.as_field().expect("expected a field block")
}

fn parts(block: &Block) -> &[Choice] {
    field(block).parts()
}

#[test]
fn test_kitchen_sink_document() {
    // a form that includes all the features available
    let form = "\
# Name

First name* = ___
Last name* = ___[50]

# Delivery

Delivery Method =
    ( ) Pickup
    (x) Postal Service

# ...

Payment* = ( ) Bill (x) Credit Card
Password = ***
Comment = ...
";

    let doc = parse(form).expect("parse");
    assert_eq!(doc.blocks.len(), 9);

    assert_eq!(
        doc.blocks[0],
        Block::Fieldset(formcode::Fieldset {
            label: Some("Name".to_string())
        })
    );

    let first = field(&doc.blocks[1]);
    assert_eq!(first.label, "First name");
    assert!(first.required);
    assert_eq!(first.kind, FieldKind::Text { length: None });

    let last = field(&doc.blocks[2]);
    assert_eq!(last.label, "Last name");
    assert!(last.required);
    assert_eq!(last.kind, FieldKind::Text { length: Some(50) });

    assert_eq!(doc.blocks[3].label(), Some("Delivery"));
    assert_eq!(doc.blocks[3].field_type(), FieldType::Fieldset);

    let method = field(&doc.blocks[4]);
    assert_eq!(method.label, "Delivery Method");
    assert_eq!(method.field_type(), FieldType::Radio);
    assert!(!method.required);
    assert_eq!(method.parts()[0].label, "Pickup");
    assert!(!method.parts()[0].checked);
    assert_eq!(method.parts()[1].label, "Postal Service");
    assert!(method.parts()[1].checked);

    // '# ...' closes the fieldset without opening a named one
    assert_eq!(
        doc.blocks[5],
        Block::Fieldset(formcode::Fieldset { label: None })
    );

    let payment = field(&doc.blocks[6]);
    assert_eq!(payment.label, "Payment");
    assert_eq!(payment.field_type(), FieldType::Radio);
    assert!(payment.required);
    assert_eq!(payment.parts()[0].label, "Bill");
    assert!(!payment.parts()[0].checked);
    assert_eq!(payment.parts()[1].label, "Credit Card");
    assert!(payment.parts()[1].checked);

    let password = field(&doc.blocks[7]);
    assert_eq!(password.label, "Password");
    assert!(!password.required);
    assert_eq!(password.kind, FieldKind::Password);

    let comment = field(&doc.blocks[8]);
    assert_eq!(comment.label, "Comment");
    assert_eq!(comment.kind, FieldKind::Textarea { rows: None });
}

#[test]
fn test_multiline_checkboxes() {
    let form = "\
# Extras

Extras = [ ] Priority Boarding
         [ ] Extra Luggage
         [x] Travel Insurance
";

    let doc = parse(form).expect("parse");
    assert_eq!(doc.blocks.len(), 2);
    assert_eq!(doc.blocks[0].label(), Some("Extras"));

    let extras = field(&doc.blocks[1]);
    assert_eq!(extras.label, "Extras");
    assert_eq!(extras.field_type(), FieldType::Checkbox);
    assert!(!extras.required);

    let labels: Vec<(&str, bool)> = extras
        .parts()
        .iter()
        .map(|part| (part.label.as_str(), part.checked))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("Priority Boarding", false),
            ("Extra Luggage", false),
            ("Travel Insurance", true),
        ]
    );
}

#[test]
fn test_choice_order_is_source_order() {
    let doc = parse("Gender = ( ) Male (x) Female ( ) Space Alien").expect("parse");
    let labels: Vec<(&str, bool)> = parts(&doc.blocks[0])
        .iter()
        .map(|part| (part.label.as_str(), part.checked))
        .collect();
    assert_eq!(
        labels,
        vec![("Male", false), ("Female", true), ("Space Alien", false)]
    );
}

#[test]
fn test_date_family() {
    let form = "\
Date = YYYY.MM.DD
Datetime = YYYY.MM.DD HH:MM
Time = HH:MM
";
    let doc = parse(form).expect("parse");
    assert_eq!(field(&doc.blocks[0]).kind, FieldKind::Date);
    assert_eq!(field(&doc.blocks[1]).kind, FieldKind::Datetime);
    assert_eq!(field(&doc.blocks[2]).kind, FieldKind::Time);
}

#[test]
fn test_stdnum_formats() {
    let doc = parse("Vat = # asdf.asdf").expect("parse");
    assert_eq!(
        field(&doc.blocks[0]).kind,
        FieldKind::Stdnum {
            format: "asdf.asdf".to_string()
        }
    );

    // the space after '#' is optional
    assert_eq!(
        parse("Vat = #test").expect("parse"),
        parse("Vat = # test").expect("parse")
    );
}

#[test]
fn test_email_field() {
    let doc = parse("E-Mail = @@@").expect("parse");
    let email = field(&doc.blocks[0]);
    assert_eq!(email.label, "E-Mail");
    assert_eq!(email.kind, FieldKind::Email);
}

#[test]
fn test_textarea_rows() {
    let doc = parse("Comment = ...[15]").expect("parse");
    assert_eq!(
        field(&doc.blocks[0]).kind,
        FieldKind::Textarea { rows: Some(15) }
    );
}

#[test]
fn test_traversal_helpers() {
    let form = "\
# Name

First name* = ___

# Delivery

Method = (x) Pickup
         ( ) Courier
             Address = ___
";
    let doc = parse(form).expect("parse");

    let labels: Vec<&str> = doc.iter_fields().map(|f| f.label.as_str()).collect();
    assert_eq!(labels, vec!["First name", "Method", "Address"]);

    assert_eq!(
        doc.find_field("Address").map(|f| f.field_type()),
        Some(FieldType::Text)
    );
    assert!(doc.find_field("Nope").is_none());

    let fieldsets: Vec<Option<&str>> =
        doc.fieldsets().map(|f| f.label.as_deref()).collect();
    assert_eq!(fieldsets, vec![Some("Name"), Some("Delivery")]);
}

#[test]
fn test_parsing_twice_yields_identical_trees() {
    let form = "Payment = (x) Bill\n          ( ) Credit Card\n";
    assert_eq!(parse(form).expect("parse"), parse(form).expect("parse"));
}

#[test]
fn test_tree_serialization_round_trip() {
    let form = "\
# Name

First name* = ___[25]
Payment = (x) Bill
          ( ) Credit Card
              Address = ___
";
    let doc = parse(form).expect("parse");
    let json = serde_json::to_string(&doc).expect("serialize");
    let back: Document = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(doc, back);
}
