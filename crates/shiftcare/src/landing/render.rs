use std::fmt::Write as _;

use chrono::{Datelike, Local};

use crate::catalog::{ListingCard, ListingCatalog};
use crate::signup::{Phase, Role, SignupForm, ValidationError, SIGNUP_API_PATH};

pub const BRAND: &str = "ShiftCare";

/// Progressive enhancement for the sign-up form. Without it the form falls
/// back to a full-page POST to `/signup`.
const SIGNUP_SCRIPT: &str = r#"<script>
(function () {
  var form = document.querySelector("form.signup-form");
  if (!form || !window.fetch) return;
  var button = form.querySelector("button[type=submit]");
  var status = form.querySelector("[data-signup-status]");
  function show(phase, message) {
    form.setAttribute("data-phase", phase);
    status.className = "status status-" + phase;
    status.textContent = message || "";
    status.hidden = !message;
  }
  form.addEventListener("submit", async function (event) {
    event.preventDefault();
    if (button.disabled) return;
    button.disabled = true;
    show("submitting", form.dataset.submittingMessage);
    var fields = new FormData(form);
    try {
      var response = await fetch(form.dataset.endpoint, {
        method: "POST",
        headers: { "Content-Type": "application/json", "Accept": "application/json" },
        body: JSON.stringify({
          name: fields.get("name") || "",
          email: fields.get("email") || "",
          role: fields.get("role")
        })
      });
      var body = await response.json();
      if (response.status === 422) {
        show("invalid", body.error);
      } else {
        if (response.ok && body.phase === "succeeded") form.reset();
        show(body.phase || "failed", body.message || form.dataset.failedMessage);
      }
    } catch (error) {
      show("failed", form.dataset.failedMessage);
    } finally {
      button.disabled = false;
    }
  });
})();
</script>
"#;

const QUICK_LINKS: [(&str, &str); 4] = [
    ("#about-us", "About Us"),
    ("#how-it-works", "How It Works"),
    ("#mock-jobs", "Open Shifts"),
    ("#pricing", "Pricing"),
];

/// Everything the sign-up section needs to draw itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormView {
    pub values: SignupForm,
    pub phase: Phase,
    pub validation: Option<ValidationError>,
}

impl FormView {
    pub fn after_submit(values: SignupForm, phase: Phase) -> Self {
        Self {
            values,
            phase,
            validation: None,
        }
    }

    pub fn rejected(values: SignupForm, error: ValidationError) -> Self {
        Self {
            values,
            phase: Phase::Idle,
            validation: Some(error),
        }
    }
}

/// Render the full landing page.
pub fn render_landing_page(catalog: &ListingCatalog, form: &FormView) -> String {
    let mut html = String::with_capacity(8 * 1024);
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    writeln!(
        html,
        "<title>{BRAND}: Elevating Healthcare, Empowering Professionals.</title>"
    )
    .expect("write title");
    html.push_str("</head>\n<body>\n");

    write_nav(&mut html);
    write_hero(&mut html);
    write_about(&mut html);
    write_how_it_works(&mut html);
    write_listings(&mut html, catalog);
    write_pricing(&mut html);
    write_signup(&mut html, form);
    write_footer(&mut html, Local::now().year());

    html.push_str("</body>\n</html>\n");
    html
}

fn write_nav(html: &mut String) {
    writeln!(html, "<nav class=\"navbar\"><a class=\"brand\" href=\"/\">{BRAND}</a>")
        .expect("write brand");
    html.push_str("<ul class=\"nav-links\">");
    for (anchor, label) in [
        ("#about-us", "About ShiftCare"),
        ("#how-it-works", "How It Works"),
        ("#mock-jobs", "Open Shifts"),
        ("#pricing", "Pricing"),
    ] {
        write!(html, "<li><a href=\"{anchor}\">{label}</a></li>").expect("write nav link");
    }
    html.push_str("</ul>");
    html.push_str("<a class=\"cta\" href=\"#get-started\">Get Early Access</a></nav>\n");
}

fn write_hero(html: &mut String) {
    html.push_str("<section class=\"hero\">");
    writeln!(
        html,
        "<h1><span>{BRAND}: Elevating Healthcare,</span> <span>Empowering Professionals.</span></h1>"
    )
    .expect("write hero heading");
    html.push_str("<p>Seamlessly connecting clinics with top medical talent for flexible shifts. Find your fit, fill critical needs, and empower healthcare.</p>");
    html.push_str("<a class=\"cta\" href=\"#mock-jobs\">Explore Live Shifts</a></section>\n");
}

fn write_about(html: &mut String) {
    html.push_str("<section id=\"about-us\" class=\"challenges\">\n<h2>The Challenges We Solve</h2>\n");
    for (audience, points) in [
        (
            "For Clinics &amp; Hospitals:",
            [
                ("Urgent Staffing Gaps", "Quickly fill shifts for sudden needs or patient surges with qualified personnel."),
                ("Streamlined Recruitment", "Drastically reduce high agency fees and lengthy hiring processes."),
                ("Operational Efficiency", "Optimize staffing levels, prevent burnout, and ensure consistent, high-quality care."),
            ],
        ),
        (
            "For Doctors &amp; Nurses:",
            [
                ("Flexible Opportunities", "Discover diverse, well-paying shifts that perfectly fit your personal schedule."),
                ("Maximize Earnings", "Effectively utilize your specialized skills and free time to significantly boost your income."),
                ("Simplified Job Search", "Access a centralized, intuitive platform for a wide range of rewarding medical assignments."),
            ],
        ),
    ] {
        writeln!(html, "<div class=\"audience\"><h3>{audience}</h3><ul>").expect("write audience");
        for (headline, detail) in points {
            writeln!(html, "<li><strong>{headline}:</strong> {detail}</li>").expect("write challenge");
        }
        html.push_str("</ul></div>\n");
    }
    html.push_str("</section>\n");
}

fn write_how_it_works(html: &mut String) {
    writeln!(
        html,
        "<section id=\"how-it-works\" class=\"steps\">\n<h2>How {BRAND} Works</h2>\n<ol>"
    )
    .expect("write steps heading");
    for (title, detail) in [
        ("Clinics Post Needs", "Effortlessly list your temporary staffing requirements with specific dates, times, and specialties."),
        ("Professionals Browse &amp; Apply", "Licensed healthcare professionals browse shifts matching their availability and expertise."),
        ("Connect &amp; Confirm", "Clinics review applicants, make offers, and secure essential temporary placements seamlessly."),
    ] {
        writeln!(html, "<li><h3>{title}</h3><p>{detail}</p></li>").expect("write step");
    }
    html.push_str("</ol>\n</section>\n");
}

fn write_pricing(html: &mut String) {
    writeln!(
        html,
        "<section id=\"pricing\" class=\"pricing\">\n<h2>Why use {BRAND}: Save time, Maximize Earnings.</h2>"
    )
    .expect("write pricing heading");
    writeln!(
        html,
        "<p>{BRAND} is built on a model that ensures fairness and maximizes value for everyone. Here&#39;s a preview of our simple and effective pricing structure once we fully launch.</p>"
    )
    .expect("write pricing intro");
    for (audience, summary, perks) in [
        (
            "For Clinics &amp; Hospitals:",
            "We believe you should only pay when we deliver: a small, flat commission per successful booking.",
            [
                "One time Onboarding Fee.",
                "Pay only when a shift is filled.",
                "Access a verified pool of talent without the recruitment overhead.",
            ],
        ),
        (
            "For Doctors &amp; Nurses:",
            "Completely free to join and use for professionals.",
            [
                "Timely Payments.",
                "Maximize your income potential flexibly.",
                "Hassle-free search and application.",
            ],
        ),
    ] {
        writeln!(html, "<div class=\"plan\"><h3>{audience}</h3><p>{summary}</p><ul>")
            .expect("write plan");
        for perk in perks {
            writeln!(html, "<li>{perk}</li>").expect("write perk");
        }
        html.push_str("</ul></div>\n");
    }
    html.push_str("<p>Our goal is to make temporary medical staffing efficient, fair, and accessible for everyone.</p>\n</section>\n");
}

fn write_listings(html: &mut String, catalog: &ListingCatalog) {
    html.push_str("<section id=\"mock-jobs\" class=\"listings\">\n<h2>Explore Open Shifts</h2>\n");
    writeln!(
        html,
        "<p>These are examples of the flexible, high-demand shifts you&#39;ll find on {BRAND}. We&#39;re currently in pre-launch!</p>"
    )
    .expect("write listings intro");
    html.push_str("<div class=\"listing-grid\">\n");
    for card in catalog.cards() {
        write_card(html, &card);
    }
    html.push_str("</div>\n</section>\n");
}

fn write_card(html: &mut String, card: &ListingCard) {
    writeln!(
        html,
        "<article class=\"listing-card\" data-listing-id=\"{}\">",
        card.id
    )
    .expect("write card open");
    writeln!(html, "<h3>{}</h3>", escape_html(&card.title)).expect("write card title");
    for (label, value) in [
        ("Specialty", &card.specialty),
        ("Clinic", &card.clinic_name),
        ("Dates", &card.dates),
        ("Time", &card.time),
        ("Location", &card.location),
    ] {
        writeln!(
            html,
            "<p><strong>{label}:</strong> {}</p>",
            escape_html(value)
        )
        .expect("write card detail");
    }
    writeln!(html, "<p class=\"rate\">Rate: {}</p>", escape_html(&card.rate))
        .expect("write card rate");
    writeln!(html, "<p>{}</p>", escape_html(&card.description)).expect("write card description");
    writeln!(
        html,
        "<a class=\"apply\" href=\"{}\" target=\"{}\" rel=\"{}\">{}</a>",
        escape_html(&card.href),
        card.target,
        card.rel,
        escape_html(&card.button_label)
    )
    .expect("write card link");
    html.push_str("</article>\n");
}

fn write_signup(html: &mut String, form: &FormView) {
    html.push_str("<section id=\"get-started\" class=\"signup\">\n");
    html.push_str("<h2>Ready to Transform Healthcare Staffing?</h2>\n");
    writeln!(
        html,
        "<p>Join our exclusive pre-launch list to be among the first to experience {BRAND}.</p>"
    )
    .expect("write signup intro");
    writeln!(
        html,
        "<form class=\"signup-form\" action=\"/signup\" method=\"POST\" data-phase=\"{}\" data-endpoint=\"{SIGNUP_API_PATH}\" data-submitting-message=\"{}\" data-failed-message=\"{}\">",
        form.phase.label(),
        escape_html(Phase::Submitting.status_message().unwrap_or_default()),
        escape_html(Phase::Failed.status_message().unwrap_or_default()),
    )
    .expect("write form open");
    html.push_str("<h3>Get Early Access</h3>\n");

    writeln!(
        html,
        "<input type=\"text\" name=\"name\" placeholder=\"Your Full Name\" value=\"{}\" required>",
        escape_html(&form.values.name)
    )
    .expect("write name input");
    writeln!(
        html,
        "<input type=\"email\" name=\"email\" placeholder=\"Your Email Address\" value=\"{}\" required>",
        escape_html(&form.values.email)
    )
    .expect("write email input");

    html.push_str("<fieldset class=\"role\"><legend>I am a:</legend>\n");
    let selected = form.values.role.as_deref().map(str::trim);
    for (index, role) in Role::ALL.into_iter().enumerate() {
        let checked = if selected == Some(role.as_str()) {
            " checked"
        } else {
            ""
        };
        let required = if index == 0 { " required" } else { "" };
        writeln!(
            html,
            "<label><input type=\"radio\" name=\"role\" value=\"{}\"{checked}{required}> {}</label>",
            role.as_str(),
            role.label()
        )
        .expect("write role option");
    }
    html.push_str("</fieldset>\n");

    // One status line, rewritten in place by the script.
    let (status_class, status_text) = match (&form.validation, form.phase.status_message()) {
        (Some(error), _) => ("invalid", error.to_string()),
        (None, message) => (form.phase.label(), message.unwrap_or_default().to_string()),
    };
    let hidden = if status_text.is_empty() { " hidden" } else { "" };
    writeln!(
        html,
        "<p class=\"status status-{status_class}\" role=\"status\" data-signup-status{hidden}>{}</p>",
        escape_html(&status_text)
    )
    .expect("write status message");

    let disabled = if form.phase.submit_disabled() {
        " disabled"
    } else {
        ""
    };
    writeln!(
        html,
        "<button type=\"submit\"{disabled}>Sign Up for Updates</button>"
    )
    .expect("write submit control");
    html.push_str("<p class=\"fine-print\">We respect your privacy. No spam, ever.</p>\n");
    html.push_str("</form>\n");
    html.push_str(SIGNUP_SCRIPT);
    html.push_str("</section>\n");
}

fn write_footer(html: &mut String, year: i32) {
    html.push_str("<footer>\n");
    writeln!(
        html,
        "<div class=\"footer-brand\"><a href=\"/\">{BRAND}</a><p>Empowering healthcare connections, one shift at a time.</p></div>"
    )
    .expect("write footer brand");

    html.push_str("<div class=\"footer-links\"><h3>Quick Links</h3><ul>");
    for (anchor, label) in QUICK_LINKS {
        write!(html, "<li><a href=\"{anchor}\">{label}</a></li>").expect("write quick link");
    }
    html.push_str("</ul></div>\n");

    html.push_str("<div class=\"footer-contact\"><h3>Contact Us</h3>");
    html.push_str("<p>123 Healthcare Ave, Medical City, MC 12345</p>");
    writeln!(
        html,
        "<p>Email: info@shiftcare.com</p><p>Phone: (123) 456-7890</p></div>"
    )
    .expect("write contact");

    writeln!(html, "<p>&copy; {year} {BRAND}. All rights reserved.</p>").expect("write copyright");
    html.push_str("</footer>\n");
}

pub(crate) fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
