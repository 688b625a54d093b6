//! Template engine setup and HTML templates.

use once_cell::sync::Lazy;
use tera::{Context, Tera};

/// Global template engine instance with embedded templates.
pub static TEMPLATES: Lazy<Tera> = Lazy::new(|| {
    let mut tera = Tera::default();

    // Embed templates directly in the binary (no external files needed)
    tera.add_raw_templates(vec![
        ("base.html", BASE_TEMPLATE),
        ("home.html", HOME_TEMPLATE),
        ("project.html", PROJECT_TEMPLATE),
        ("not_found.html", NOT_FOUND_TEMPLATE),
    ])
    .expect("Failed to load templates");

    tera
});

/// Render a template with context.
pub fn render(template: &str, context: &Context) -> Result<String, tera::Error> {
    TEMPLATES.render(template, context)
}

// =============================================================================
// Embedded templates
// =============================================================================

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{{ title }}</title>
    <link rel="stylesheet" href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css">
    <style>
        :root {
            --bg: #fdfcf9;
            --ink: #1d2129;
            --ink-soft: #5b6270;
            --accent: #0e7490;
            --card: #ffffff;
            --border: #e4e2db;
        }

        * { box-sizing: border-box; margin: 0; padding: 0; }

        body {
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
            background: var(--bg);
            color: var(--ink);
            line-height: 1.6;
        }

        main { max-width: 960px; margin: 0 auto; padding: 2rem 1.25rem 4rem; }

        h1 { font-size: 2rem; margin-bottom: 0.5rem; }
        h2 { font-size: 1.4rem; margin: 2.5rem 0 1rem; }
        h3 { font-size: 1.05rem; margin-bottom: 0.25rem; }
        a { color: var(--accent); }

        .hero .subtitle { color: var(--ink-soft); font-size: 1.1rem; }
        .hero .bio { margin: 1rem 0; max-width: 42rem; }
        .hero .eyebrow {
            text-transform: uppercase; letter-spacing: 0.08em;
            font-size: 0.75rem; color: var(--ink-soft);
        }

        .actions { display: flex; gap: 0.75rem; margin-top: 1rem; }
        .button {
            display: inline-block; padding: 0.5rem 1rem; border-radius: 6px;
            background: var(--accent); color: #fff; text-decoration: none;
        }
        .button.ghost { background: transparent; color: var(--accent); border: 1px solid var(--accent); }

        .grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(260px, 1fr)); gap: 1rem; }
        .card {
            background: var(--card); border: 1px solid var(--border);
            border-radius: 8px; padding: 1.25rem;
        }
        .card img { width: 100%; border-radius: 6px; margin-bottom: 0.75rem; }
        .card p { color: var(--ink-soft); font-size: 0.92rem; margin-bottom: 0.75rem; }

        .tags { list-style: none; display: flex; flex-wrap: wrap; gap: 0.4rem; margin-bottom: 0.75rem; }
        .tags li {
            font-size: 0.75rem; padding: 0.15rem 0.6rem; border-radius: 999px;
            background: #eef6f8; color: var(--accent);
        }

        .entry { display: flex; gap: 1rem; padding: 1rem 0; border-bottom: 1px solid var(--border); }
        .entry .mark {
            flex: none; width: 3rem; height: 3rem; border-radius: 8px;
            display: flex; align-items: center; justify-content: center;
            background: #eef6f8; color: var(--accent); font-weight: 600; font-size: 0.8rem;
        }
        .entry .meta { color: var(--ink-soft); font-size: 0.88rem; margin-bottom: 0.4rem; }
        .entry ul { margin: 0 0 0.5rem 1.1rem; font-size: 0.92rem; }

        .badges { list-style: none; display: flex; flex-wrap: wrap; gap: 1rem; }
        .badges li {
            display: flex; align-items: center; gap: 0.5rem;
            padding: 0.4rem 0.8rem; border: 1px solid var(--border); border-radius: 6px;
            background: var(--card);
        }
        .badges i { font-size: 1.3rem; }

        .detail img { max-width: 100%; border-radius: 8px; margin: 1rem 0; }
        .detail .back { display: inline-block; margin-bottom: 1.5rem; text-decoration: none; }

        .missing { text-align: center; padding: 4rem 0; }
        .missing p { color: var(--ink-soft); margin: 0.75rem 0 1.5rem; }

        footer {
            border-top: 1px solid var(--border); padding: 1.5rem 1.25rem;
            text-align: center; color: var(--ink-soft); font-size: 0.85rem;
        }
    </style>
</head>
<body>
    <main>
        {% block content %}{% endblock content %}
    </main>
    <footer>&copy; {{ now() | date(format="%Y") }} Girindra Sulistiyo Wardoyo</footer>
</body>
</html>"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<section class="hero">
    <p class="eyebrow">{{ profile.location }}</p>
    <h1>{{ profile.name }}</h1>
    <p class="subtitle">{{ profile.subtitle }}</p>
    <p class="bio">{{ profile.description }}</p>
    <div class="actions">
        <a class="button" href="{{ profile.whatsapp_link }}" target="_blank" rel="noopener noreferrer">Chat on WhatsApp</a>
        <a class="button ghost" href="{{ profile.cv_link }}">Download CV</a>
    </div>
</section>

<section id="projects">
    <h2>Projects</h2>
    <div class="grid">
        {% for project in projects %}
        <article class="card">
            {% if project.imageUrl %}<img src="{{ project.imageUrl }}" alt="{{ project.name }}">{% endif %}
            <h3>{{ project.name }}</h3>
            <p>{{ project.description }}</p>
            <ul class="tags">
                {% for tech in project.techStack %}<li>{{ tech }}</li>{% endfor %}
            </ul>
            <a href="{{ project.detailUrl }}" target="{{ project.detailTarget }}"{% if project.detailRel %} rel="{{ project.detailRel }}"{% endif %}>View project</a>
        </article>
        {% endfor %}
    </div>
</section>

<section id="experience">
    <h2>Experience</h2>
    {% for exp in experiences %}
    <article class="entry">
        <span class="mark">{{ exp.mark }}</span>
        <div>
            <h3>{{ exp.role }}</h3>
            <p class="meta">{{ exp.company }} &middot; {{ exp.duration }}</p>
            <ul>
                {% for item in exp.responsibilities %}<li>{{ item }}</li>{% endfor %}
            </ul>
            <ul class="tags">
                {% for skill in exp.skills %}<li>{{ skill }}</li>{% endfor %}
            </ul>
        </div>
    </article>
    {% endfor %}
</section>

<section id="stack">
    <h2>Tech Stack</h2>
    <ul class="badges">
        {% for tech in tech_stack %}<li><i class="{{ tech.icon }}"></i>{{ tech.label }}</li>{% endfor %}
    </ul>
</section>
{% endblock content %}"##;

const PROJECT_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<article class="detail">
    <a class="back" href="/">&larr; Back to home</a>
    <h1>{{ project.name }}</h1>
    {% if project.imageUrl %}<img src="{{ project.imageUrl }}" alt="{{ project.name }}">{% endif %}
    <p>{{ project.description }}</p>
    <ul class="tags">
        {% for tech in project.techStack %}<li>{{ tech }}</li>{% endfor %}
    </ul>
    {% if project.detailTarget == "_blank" %}
    <a href="{{ project.detailUrl }}" target="_blank" rel="{{ project.detailRel }}">View the repository</a>
    {% endif %}
</article>
{% endblock content %}"##;

const NOT_FOUND_TEMPLATE: &str = r##"{% extends "base.html" %}
{% block content %}
<section class="missing">
    <h1>Project Not Found</h1>
    <p>The project you are looking for does not exist or has moved.</p>
    <a href="/">Back to home</a>
</section>
{% endblock content %}"##;
