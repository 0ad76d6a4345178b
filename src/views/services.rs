// ============================================================================
// SERVICES VIEW - Catálogo en tarjetas y opciones del selector
// ============================================================================

use crate::dom::{ElementBuilder, VNode};
use crate::models::Service;
use crate::state::action::Action;
use crate::utils::format::format_currency;
use crate::views::shared::or;

/// Opciones de `#service-select`, con el placeholder primero
pub fn render_service_options(services: &[Service]) -> Vec<VNode> {
    let placeholder = ElementBuilder::new("option")
        .attr("value", "")
        .text("Select a service")
        .build();

    std::iter::once(placeholder)
        .chain(services.iter().filter_map(|service| {
            let id = service.id?;
            let mut option = ElementBuilder::new("option")
                .attr("value", &id.to_string())
                .text(&format!(
                    "{} - {}",
                    or(service.name.as_deref(), "Service"),
                    format_currency(service.price)
                ));
            if let Some(price) = service.price {
                option = option.attr("data-price", &price.to_string());
            }
            Some(option.build())
        }))
        .collect()
}

/// Tarjetas de `#services-list`
pub fn render_service_cards(services: &[Service]) -> Vec<VNode> {
    if services.is_empty() {
        return vec![ElementBuilder::new("div")
            .class("col-12")
            .child(
                ElementBuilder::new("p")
                    .class("text-muted")
                    .text("No services available")
                    .build(),
            )
            .build()];
    }
    services.iter().map(render_service_card).collect()
}

fn render_service_card(service: &Service) -> VNode {
    let name = or(service.name.as_deref(), "Service");

    let mut body = ElementBuilder::new("div")
        .class("card-body")
        .child(ElementBuilder::new("h5").class("card-title").text(name).build())
        .child(
            ElementBuilder::new("p")
                .class("card-text")
                .text(or(service.description.as_deref(), "No description available"))
                .build(),
        )
        .child(
            ElementBuilder::new("p")
                .class("card-text text-primary font-weight-bold")
                .text(&format_currency(service.price))
                .build(),
        );

    if let Some(id) = service.id {
        body = body.child(
            ElementBuilder::new("button")
                .class("btn btn-primary")
                .on_click(Action::BookService {
                    service_id: id,
                    name: name.to_string(),
                    price: service.price,
                    provider_id: service.provider_id,
                })
                .text("Book Now")
                .build(),
        );
    }

    ElementBuilder::new("div")
        .class("col-md-4 mb-4")
        .child(ElementBuilder::new("div").class("card").child(body.build()).build())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service(id: i64, name: &str, price: f64) -> Service {
        Service {
            id: Some(id),
            name: Some(name.into()),
            price: Some(price),
            provider_id: Some(8),
            ..Default::default()
        }
    }

    #[test]
    fn options_start_with_placeholder() {
        let nodes = render_service_options(&[service(1, "Plumbing", 50.0), service(2, "Cleaning", 19.5)]);
        assert_eq!(nodes.len(), 3);
        assert_eq!(nodes[0].text_content(), "Select a service");
        let option = nodes[2].as_element().unwrap();
        assert_eq!(option.attr("value"), Some("2"));
        assert_eq!(option.attr("data-price"), Some("19.5"));
        assert_eq!(nodes[2].text_content(), "Cleaning - $19.50");
    }

    #[test]
    fn cards_fall_back_on_description() {
        let nodes = render_service_cards(&[service(1, "Plumbing", 50.0)]);
        assert_eq!(nodes.len(), 1);
        assert!(nodes[0].text_content().contains("No description available"));
        assert_eq!(
            nodes[0].actions(),
            vec![Action::BookService {
                service_id: 1,
                name: "Plumbing".into(),
                price: Some(50.0),
                provider_id: Some(8),
            }]
        );
    }
}
