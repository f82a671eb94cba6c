//! The admin preview dashboard: a static grid of navigation cards.
//!
//! The links are opaque paths into sibling app features; the dashboard
//! enforces no contract over them beyond rendering.

/// One navigation card on the dashboard.
struct NavCard {
    title: &'static str,
    href: &'static str,
    blurb: &'static str,
}

const NAV_CARDS: [NavCard; 9] = [
    NavCard {
        title: "Report Viewer",
        href: "/reports",
        blurb: "Browse generated natal reports",
    },
    NavCard {
        title: "Book Designer",
        href: "/book-designer",
        blurb: "Compose printed report books",
    },
    NavCard {
        title: "Companion",
        href: "/companion",
        blurb: "Daily guidance companion",
    },
    NavCard {
        title: "Quiz Flow",
        href: "/quiz",
        blurb: "Onboarding quiz funnel",
    },
    NavCard {
        title: "Audit Logs",
        href: "/admin/audit-logs",
        blurb: "Review admin activity",
    },
    NavCard {
        title: "Recovery Codes",
        href: "/admin/recovery-codes",
        blurb: "Manage account recovery",
    },
    NavCard {
        title: "Stats",
        href: "/api/stats",
        blurb: "Content table counts",
    },
    NavCard {
        title: "Health Check",
        href: "/api/health",
        blurb: "Service liveness probe",
    },
    NavCard {
        title: "Monitoring",
        href: "/admin/monitoring",
        blurb: "Runtime dashboards",
    },
];

/// Render the dashboard page.
pub fn render_dashboard() -> String {
    let mut cards = String::new();
    for card in &NAV_CARDS {
        cards.push_str(&format!(
            "      <a class=\"card\" href=\"{href}\"><h2>{title}</h2><p>{blurb}</p></a>\n",
            href = card.href,
            title = card.title,
            blurb = card.blurb,
        ));
    }

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Sidera Admin</title>
  <style>
    body {{ font-family: system-ui, sans-serif; margin: 2rem; background: #0e0e14; color: #e8e6f0; }}
    h1 {{ font-weight: 600; }}
    .grid {{ display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }}
    .card {{ display: block; padding: 1rem; border: 1px solid #32304a; border-radius: 8px;
             text-decoration: none; color: inherit; background: #171622; }}
    .card h2 {{ margin: 0 0 0.4rem; font-size: 1rem; }}
    .card p {{ margin: 0; font-size: 0.85rem; color: #a8a4c0; }}
    form {{ margin-top: 2rem; }}
    button {{ padding: 0.5rem 1rem; border-radius: 6px; border: 1px solid #32304a;
              background: #171622; color: inherit; cursor: pointer; }}
  </style>
</head>
<body>
  <h1>Sidera Admin</h1>
  <div class="grid">
{cards}  </div>
  <form method="post" action="/api/auth/logout">
    <button type="submit">Log out</button>
  </form>
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_lists_every_card() {
        let html = render_dashboard();
        for card in &NAV_CARDS {
            assert!(html.contains(card.href), "missing link {}", card.href);
            assert!(html.contains(card.title), "missing title {}", card.title);
        }
    }

    #[test]
    fn dashboard_has_logout_form() {
        let html = render_dashboard();
        assert!(html.contains("action=\"/api/auth/logout\""));
        assert!(html.contains("method=\"post\""));
    }
}
