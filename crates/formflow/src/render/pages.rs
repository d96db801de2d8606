use std::fmt::Write;

use super::html::{checked, error_slot, escape_html, selected};
use crate::forms::rules::hinted_rules;
use crate::forms::{
    ContactMessage, FormKind, FormState, Gender, Submission, CITY_OPTIONS, HOBBY_OPTIONS,
};

fn text_input(html: &mut String, state: &FormState, field: &str, label: &str, input_type: &str) {
    html.push_str("<div class=\"field\">\n");
    writeln!(html, "<label for=\"{field}\">{label}</label>").expect("write label");
    writeln!(
        html,
        "<input type=\"{input_type}\" id=\"{field}\" name=\"{field}\" value=\"{}\">",
        escape_html(state.value(field))
    )
    .expect("write input");
    error_slot(html, field, state.error(field));
    html.push_str("</div>\n");
}

fn password_input(html: &mut String, state: &FormState, field: &str, label: &str) {
    html.push_str("<div class=\"field\">\n");
    writeln!(html, "<label for=\"{field}\">{label}</label>").expect("write label");
    writeln!(
        html,
        "<input type=\"password\" id=\"{field}\" name=\"{field}\" autocomplete=\"new-password\">"
    )
    .expect("write password input");
    error_slot(html, field, state.error(field));
    html.push_str("</div>\n");
}

pub(super) fn contact_form(state: &FormState) -> String {
    let mut html = String::new();
    html.push_str("<form method=\"post\" action=\"/submit\" novalidate>\n");
    text_input(&mut html, state, "name", "Name", "text");
    text_input(&mut html, state, "email", "Email", "email");

    html.push_str("<div class=\"field\">\n<label for=\"message\">Message</label>\n");
    writeln!(
        html,
        "<textarea id=\"message\" name=\"message\" rows=\"5\">{}</textarea>",
        escape_html(state.value("message"))
    )
    .expect("write textarea");
    error_slot(&mut html, "message", state.error("message"));
    html.push_str("</div>\n<button type=\"submit\">Send</button>\n</form>\n");
    html
}

pub(super) fn registration_form(kind: FormKind, state: &FormState) -> String {
    let mut html = String::new();
    html.push_str("<form id=\"registrationForm\" method=\"post\" action=\"/submit\" novalidate>\n");
    text_input(&mut html, state, "fullname", "Full name", "text");
    text_input(&mut html, state, "email", "Email", "email");

    password_input(&mut html, state, "password", "Password");
    let mut hints = hinted_rules(kind, "password").peekable();
    if hints.peek().is_some() {
        html.push_str("<ul class=\"password-hints\">\n");
        for rule in hints {
            if let Some(hint) = rule.hint {
                writeln!(html, "<li id=\"{hint}\">{}</li>", escape_html(rule.message))
                    .expect("write hint");
            }
        }
        html.push_str("</ul>\n");
    }
    password_input(&mut html, state, "confirmPassword", "Confirm password");

    let chosen_gender = Gender::parse(state.value("gender"));
    html.push_str("<fieldset class=\"field\">\n<legend>Gender</legend>\n");
    for gender in Gender::ordered() {
        writeln!(
            html,
            "<label><input type=\"radio\" name=\"gender\" value=\"{}\"{}> {}</label>",
            gender.value(),
            checked(chosen_gender == Some(gender)),
            gender.label()
        )
        .expect("write gender option");
    }
    error_slot(&mut html, "gender", state.error("gender"));
    html.push_str("</fieldset>\n");

    let chosen_hobbies = state.values.list("hobbies");
    html.push_str("<fieldset class=\"field\">\n<legend>Hobbies</legend>\n");
    for hobby in HOBBY_OPTIONS {
        let on = chosen_hobbies.iter().any(|value| value == hobby);
        writeln!(
            html,
            "<label><input type=\"checkbox\" name=\"hobbies\" value=\"{hobby}\"{}> {hobby}</label>",
            checked(on)
        )
        .expect("write hobby option");
    }
    html.push_str("</fieldset>\n");

    let chosen_city = state.value("city");
    html.push_str("<div class=\"field\">\n<label for=\"city\">City</label>\n");
    html.push_str("<select id=\"city\" name=\"city\">\n<option value=\"\">Select a city</option>\n");
    for city in CITY_OPTIONS {
        writeln!(
            html,
            "<option value=\"{city}\"{}>{city}</option>",
            selected(chosen_city == city)
        )
        .expect("write city option");
    }
    if !chosen_city.trim().is_empty() && !CITY_OPTIONS.contains(&chosen_city) {
        let custom = escape_html(chosen_city);
        writeln!(html, "<option value=\"{custom}\" selected>{custom}</option>")
            .expect("write custom city option");
    }
    html.push_str("</select>\n");
    error_slot(&mut html, "city", state.error("city"));
    html.push_str("</div>\n");

    html.push_str("<div class=\"field\">\n");
    writeln!(
        html,
        "<label><input type=\"checkbox\" name=\"terms\" value=\"on\"{}> I agree to the terms</label>",
        checked(!state.value("terms").is_empty())
    )
    .expect("write terms");
    error_slot(&mut html, "terms", state.error("terms"));
    html.push_str("</div>\n<button type=\"submit\">Register</button>\n</form>\n");
    html.push_str("<p><a href=\"/submissions\">View all submissions</a></p>\n");
    html
}

pub(super) fn contact_result(message: &ContactMessage) -> String {
    let mut html = String::from("<dl>\n");
    for (label, value) in [
        ("Name", message.name.as_str()),
        ("Email", message.email.as_str()),
        ("Message", message.message.as_str()),
    ] {
        writeln!(html, "<dt>{label}</dt><dd>{}</dd>", escape_html(value)).expect("write entry");
    }
    writeln!(
        html,
        "<dt>Submitted at</dt><dd>{}</dd>\n</dl>",
        message.submitted_at.format("%Y-%m-%d %H:%M:%S UTC")
    )
    .expect("write timestamp");
    html.push_str("<p><a href=\"/\">Send another message</a></p>\n");
    html
}

pub(super) fn registration_success(submission: &Submission) -> String {
    let hobbies = if submission.hobbies.is_empty() {
        "None".to_string()
    } else {
        submission.hobbies.join(", ")
    };
    let submitted_at = submission.submitted_at.to_rfc3339();

    let mut html = String::from("<p>Thank you for registering.</p>\n<dl>\n");
    for (label, value) in [
        ("Full name", submission.fullname.as_str()),
        ("Email", submission.email.as_str()),
        ("Gender", submission.gender.label()),
        ("Hobbies", hobbies.as_str()),
        ("City", submission.city.as_str()),
        ("Agreed to terms", if submission.agreed { "Yes" } else { "No" }),
        ("Submitted at", submitted_at.as_str()),
    ] {
        writeln!(html, "<dt>{label}</dt><dd>{}</dd>", escape_html(value)).expect("write entry");
    }
    html.push_str("</dl>\n<p><a href=\"/\">Register another</a> | <a href=\"/submissions\">View all submissions</a></p>\n");
    html
}

pub(super) fn submission_list(submissions: &[Submission]) -> String {
    if submissions.is_empty() {
        return "<p>No submissions yet.</p>\n<p><a href=\"/\">Back to the form</a></p>\n"
            .to_string();
    }

    let mut html = String::from(
        "<table>\n<thead><tr><th>Full name</th><th>Email</th><th>Gender</th><th>Hobbies</th><th>City</th><th>Agreed</th><th>Submitted at</th></tr></thead>\n<tbody>\n",
    );
    for submission in submissions {
        writeln!(
            html,
            "<tr class=\"submission\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&submission.fullname),
            escape_html(&submission.email),
            submission.gender.label(),
            escape_html(&submission.hobbies.join(", ")),
            escape_html(&submission.city),
            if submission.agreed { "Yes" } else { "No" },
            submission.submitted_at.to_rfc3339()
        )
        .expect("write row");
    }
    html.push_str("</tbody>\n</table>\n<p><a href=\"/\">Back to the form</a></p>\n");
    html
}
