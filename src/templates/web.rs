//! Flask web application bundle.

use super::{Bundle, TemplateFile};
use crate::classifier::Category;

pub(crate) static FLASK_APP: Bundle = Bundle {
    name: "flask_app",
    category: Category::Web,
    files: &[
        TemplateFile {
            path: "app.py",
            body: APP_PY,
        },
        TemplateFile {
            path: "templates/index.html",
            body: INDEX_HTML,
        },
        TemplateFile {
            path: "static/style.css",
            body: STYLE_CSS,
        },
        TemplateFile {
            path: "requirements.txt",
            body: REQUIREMENTS,
        },
    ],
    required: &["app_title", "description", "primary_color", "accent_color"],
};

const APP_PY: &str = r#""""${app_title} - ${description}"""

from flask import Flask, redirect, render_template, request, url_for

app = Flask(__name__)

# In-memory store; swap for a database when the app grows past a demo
items = [
    {"id": 1, "title": "First item", "done": False},
    {"id": 2, "title": "Second item", "done": True},
]


@app.route("/")
def index():
    return render_template("index.html", items=items)


@app.route("/add", methods=["POST"])
def add():
    title = request.form.get("title", "").strip()
    if title:
        next_id = max((item["id"] for item in items), default=0) + 1
        items.append({"id": next_id, "title": title, "done": False})
    return redirect(url_for("index"))


@app.route("/toggle/<int:item_id>", methods=["POST"])
def toggle(item_id):
    for item in items:
        if item["id"] == item_id:
            item["done"] = not item["done"]
    return redirect(url_for("index"))


if __name__ == "__main__":
    app.run(debug=True)
"#;

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>${app_title}</title>
    <link rel="stylesheet" href="{{ url_for('static', filename='style.css') }}">
</head>
<body>
    <main class="container">
        <h1>${app_title}</h1>
        <form action="{{ url_for('add') }}" method="post" class="add-form">
            <input type="text" name="title" placeholder="Add something..." required>
            <button type="submit">Add</button>
        </form>
        <ul class="items">
            {% for item in items %}
            <li class="item {{ 'done' if item.done else '' }}">
                <form action="{{ url_for('toggle', item_id=item.id) }}" method="post">
                    <button type="submit" class="toggle" aria-label="toggle">
                        {{ '☑' if item.done else '☐' }}
                    </button>
                </form>
                <span>{{ item.title }}</span>
            </li>
            {% endfor %}
        </ul>
    </main>
</body>
</html>
"#;

const STYLE_CSS: &str = r#":root {
    --primary: ${primary_color};
    --accent: ${accent_color};
}

* {
    box-sizing: border-box;
}

body {
    margin: 0;
    font-family: system-ui, -apple-system, sans-serif;
    background: #f8fafc;
    color: #0f172a;
}

.container {
    max-width: 640px;
    margin: 3rem auto;
    padding: 0 1rem;
}

h1 {
    color: var(--primary);
    border-bottom: 3px solid var(--accent);
    padding-bottom: 0.5rem;
}

.add-form {
    display: flex;
    gap: 0.5rem;
    margin: 1.5rem 0;
}

.add-form input {
    flex: 1;
    padding: 0.5rem 0.75rem;
    border: 1px solid #cbd5e1;
    border-radius: 6px;
}

.add-form button {
    padding: 0.5rem 1.25rem;
    background: var(--primary);
    color: white;
    border: none;
    border-radius: 6px;
    cursor: pointer;
}

.items {
    list-style: none;
    padding: 0;
}

.item {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    padding: 0.6rem 0.75rem;
    background: white;
    border: 1px solid #e2e8f0;
    border-radius: 6px;
    margin-bottom: 0.5rem;
}

.item.done span {
    text-decoration: line-through;
    color: #94a3b8;
}

.toggle {
    background: none;
    border: none;
    font-size: 1.1rem;
    cursor: pointer;
    color: var(--accent);
}
"#;

const REQUIREMENTS: &str = "flask>=3.0\n";
