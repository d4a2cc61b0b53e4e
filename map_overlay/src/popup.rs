//! Popup HTML assembled by string interpolation from record fields, the
//! way the widget binds it: static markup, no templating engine.

use crate::labels;
use crate::markers::status_color;
use itertools::Itertools;
use maraudes::data::OutreachAction;
use merchants::data::Merchant;

fn detail_row(icon: &str, text: &str) -> String {
    format!(r#"<div class="popup-detail"><strong>{icon}</strong> {text}</div>"#)
}

pub fn maraude_popup(action: &OutreachAction) -> String {
    let status_text = labels::status_label(action.status);
    let color = status_color(action.status);

    let schedule_text = if action.is_recurring {
        let day = action
            .day_name
            .clone()
            .or_else(|| action.day_of_week.map(|day| day.french_name().to_string()))
            .unwrap_or_default();
        format!("Tous les {day}s à {}", action.start_time)
    } else {
        let date = action
            .scheduled_date
            .map(|date| date.format("%d/%m/%Y").to_string())
            .unwrap_or_default();
        format!("{date} à {}", action.start_time)
    };

    let today_badge = if action.happening_today() {
        r#"<span class="popup-today">Aujourd'hui</span>"#
    } else {
        ""
    };

    let mut details = vec![
        detail_row("📍", action.address.as_deref().unwrap_or("")),
        detail_row("📅", &schedule_text),
    ];
    if let Some(end_time) = &action.end_time {
        details.push(detail_row("⏰", &format!("Fin prévue: {end_time}")));
    }
    details.push(detail_row(
        "👥",
        &format!("{} bénévoles", action.participants_count),
    ));
    if action.beneficiaries_helped > 0 {
        details.push(detail_row(
            "❤️",
            &format!("{} personnes aidées", action.beneficiaries_helped),
        ));
    }
    if action.is_recurring {
        if let Some(next) = &action.next_occurrence {
            details.push(detail_row("🔄", &format!("Prochaine: {next}")));
        }
    }
    let association_name = action
        .association
        .as_ref()
        .map(|association| association.name.as_str())
        .unwrap_or("Association");
    details.push(detail_row("🏢", association_name));

    format!(
        r#"<div class="popup-content">
  <div class="popup-header">
    <h3 class="popup-title">{title}</h3>
    <span class="popup-status" style="background-color: {color}20; color: {color}">{status_text}</span>{today_badge}
  </div>
  <div class="popup-body">
    <p class="popup-description">{description}</p>
    <div class="popup-details">{details}</div>
  </div>
</div>"#,
        title = action.title,
        description = action.description.as_deref().unwrap_or(""),
        details = details.join("\n")
    )
}

pub fn merchant_popup(merchant: &Merchant) -> String {
    let services = merchant
        .services
        .iter()
        .map(labels::service_label)
        .join(", ");

    let verified_badge = if merchant.is_verified {
        r#"<span class="popup-verified">✓ Vérifié</span>"#
    } else {
        ""
    };

    let mut details = vec![detail_row("📍", &merchant.address)];
    if let Some(phone) = &merchant.phone {
        details.push(detail_row("📞", phone));
    }
    if !services.is_empty() {
        details.push(detail_row("🎯", &services));
    }
    if let Some(contact) = &merchant.contact_person {
        details.push(detail_row("👤", contact));
    }

    let instructions = merchant
        .special_instructions
        .as_ref()
        .map(|text| {
            format!(
                r#"<div class="popup-instructions"><strong>ℹ️ Instructions:</strong> {text}</div>"#
            )
        })
        .unwrap_or_default();

    format!(
        r#"<div class="popup-content">
  <div class="popup-header">
    <h3 class="popup-title">{name}</h3>
    <span class="popup-category">{category}</span>{verified_badge}
  </div>
  <div class="popup-body">
    <p class="popup-description">{description}</p>
    <div class="popup-details">{details}</div>
    {instructions}
  </div>
</div>"#,
        name = merchant.name,
        category = labels::category_label(merchant.category),
        description = merchant.description.as_deref().unwrap_or(""),
        details = details.join("\n")
    )
}
