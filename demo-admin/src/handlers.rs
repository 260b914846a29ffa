use axum::extract::Path;
use axum::response::Html;

use folio_auth_axum::{AuthUser, FOLIO_ROUTE_PREFIX};

fn page(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><title>{title} - folio</title></head>
<body>
<nav><a href="/">Home</a> <a href="/about">About</a> <a href="/services">Services</a> <a href="/projects">Projects</a> <a href="/cv">CV</a> <a href="/contact">Contact</a> <a href="/dashboard">Dashboard</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>"#
    ))
}

pub(crate) async fn index() -> Html<String> {
    page("Home", "<p>Welcome to my portfolio.</p>")
}

pub(crate) async fn about() -> Html<String> {
    page("About", "<p>A few words about me.</p>")
}

pub(crate) async fn services() -> Html<String> {
    page("Services", "<p>What I can do for you.</p>")
}

pub(crate) async fn projects() -> Html<String> {
    page("Projects", "<p>Selected work.</p>")
}

pub(crate) async fn cv() -> Html<String> {
    page("CV", "<p>Experience and education.</p>")
}

pub(crate) async fn contact() -> Html<String> {
    page("Contact", "<p>Get in touch.</p>")
}

pub(crate) async fn login_page() -> Html<String> {
    let body = format!(
        r#"<form id="login-form">
<label>Username <input name="username" autocomplete="username"></label>
<label>Password <input name="password" type="password" autocomplete="current-password"></label>
<button type="submit">Sign in</button>
</form>
<p id="status"></p>
<script>
document.getElementById("login-form").addEventListener("submit", async (event) => {{
    event.preventDefault();
    const form = new FormData(event.target);
    const status = document.getElementById("status");
    status.textContent = "Signing in...";
    const response = await fetch("{prefix}/login", {{
        method: "POST",
        headers: {{ "Content-Type": "application/json" }},
        body: JSON.stringify({{ username: form.get("username"), password: form.get("password") }}),
    }});
    if (response.ok) {{
        const from = new URLSearchParams(location.search).get("from");
        location.href = from || "/dashboard";
    }} else {{
        status.textContent = "Invalid credentials";
    }}
}});
</script>"#,
        prefix = FOLIO_ROUTE_PREFIX.as_str()
    );
    page("Login", &body)
}

pub(crate) async fn dashboard(user: AuthUser) -> Html<String> {
    let body = format!(
        r#"<p>Signed in as {}.</p>
<ul>
<li><a href="/dashboard/cv">CV editor</a></li>
<li><a href="/dashboard/projects">Projects</a></li>
<li><a href="/dashboard/messages">Messages</a></li>
<li><a href="/dashboard/settings">Settings</a></li>
</ul>
<button onclick='fetch("{}/logout", {{method: "POST"}}).then(() => location.href = "/login")'>Sign out</button>"#,
        user.username,
        FOLIO_ROUTE_PREFIX.as_str()
    );
    page("Dashboard", &body)
}

pub(crate) async fn dashboard_section(user: AuthUser, Path(section): Path<String>) -> Html<String> {
    let body = format!(
        "<p>Managing {section} as {}.</p><p><a href=\"/dashboard\">Back to dashboard</a></p>",
        user.username
    );
    page("Dashboard", &body)
}
