//! Card View Models
//!
//! Pure mapping from server items to what a card displays. Text ends up in
//! text nodes and attributes, so no markup is ever built from server data.

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::filter::CardAttributes;
use crate::models::{status_color, Zayavka};

/// Characters escaped in a path segment of an upload link
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Everything a card needs to render
#[derive(Debug, Clone, PartialEq)]
pub struct CardModel {
    pub id: u32,
    pub class: &'static str,
    pub title: String,
    pub description: String,
    pub created_at: String,
    pub status: String,
    pub status_color: &'static str,
    pub file_href: Option<String>,
    pub data_type: String,
    pub data_status: String,
    pub data_description: String,
    pub data_username: String,
    pub data_fullname: String,
}

impl CardModel {
    /// Attributes the filter engine reads
    pub fn attributes(&self) -> CardAttributes<'_> {
        CardAttributes {
            zayavka_type: &self.data_type,
            status: &self.data_status,
            description: &self.data_description,
            username: &self.data_username,
            full_name: &self.data_fullname,
        }
    }
}

/// Link to an uploaded attachment
pub fn upload_href(file: &str) -> String {
    format!("/uploads/{}", utf8_percent_encode(file, PATH_SEGMENT))
}

pub fn render_card(z: &Zayavka) -> CardModel {
    CardModel {
        id: z.id,
        class: if z.urgent { "card urgent" } else { "card" },
        title: z.zayavka_type.clone(),
        description: z.description.clone(),
        created_at: z.created_at.clone(),
        status: z.status.clone(),
        status_color: status_color(&z.status),
        file_href: z.file.as_deref().filter(|f| !f.is_empty()).map(upload_href),
        data_type: z.zayavka_type.clone(),
        data_status: z.status.clone(),
        data_description: z.description.clone(),
        data_username: z.username.clone(),
        data_fullname: z.full_name.clone(),
    }
}

/// Cards for a whole list, in server order
pub fn render_list(items: &[Zayavka]) -> Vec<CardModel> {
    items.iter().map(render_card).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u32, urgent: bool, file: Option<&str>) -> Zayavka {
        Zayavka {
            id,
            zayavka_type: "Заявка".to_string(),
            description: "<script>alert(1)</script>".to_string(),
            status: "Сделано".to_string(),
            created_at: "2024-05-01".to_string(),
            file: file.map(str::to_string),
            urgent,
            username: "ivan".to_string(),
            full_name: "Иван".to_string(),
        }
    }

    #[test]
    fn test_render_list_keeps_order_and_fields() {
        let cards = render_list(&[item(2, false, None), item(1, true, None)]);
        assert_eq!(cards.iter().map(|c| c.id).collect::<Vec<_>>(), vec![2, 1]);
        assert_eq!(cards[0].class, "card");
        assert_eq!(cards[1].class, "card urgent");
        assert_eq!(cards[0].status_color, "green");
        assert_eq!(cards[0].data_fullname, "Иван");
        assert_eq!(cards[0].attributes(), items_attrs());
    }

    fn items_attrs() -> CardAttributes<'static> {
        CardAttributes {
            zayavka_type: "Заявка",
            status: "Сделано",
            description: "<script>alert(1)</script>",
            username: "ivan",
            full_name: "Иван",
        }
    }

    #[test]
    fn test_description_is_kept_verbatim_for_text_nodes() {
        let card = render_card(&item(1, false, None));
        assert_eq!(card.description, "<script>alert(1)</script>");
    }

    #[test]
    fn test_file_href_is_percent_encoded() {
        let card = render_card(&item(1, false, Some("a1b2_отчёт 1.pdf")));
        let href = card.file_href.unwrap();
        assert!(href.starts_with("/uploads/a1b2_"));
        assert!(!href.contains(' '));
        assert!(href.ends_with("%201.pdf"));

        let card = render_card(&item(1, false, Some("../\"><img>")));
        assert_eq!(card.file_href.unwrap(), "/uploads/..%2F%22%3E%3Cimg%3E");
    }

    #[test]
    fn test_missing_or_empty_file_has_no_link() {
        assert!(render_card(&item(1, false, None)).file_href.is_none());
        assert!(render_card(&item(1, false, Some(""))).file_href.is_none());
    }
}
