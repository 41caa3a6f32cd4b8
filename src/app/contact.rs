use leptos::{html, prelude::*};

use super::reveal::Reveal;
use crate::contact::ContactMessage;
use crate::content::{content, ContactEntry, ContactIcon};

#[component]
pub fn ContactPanel() -> impl IntoView {
    view! {
        <Reveal>
            <div class="cartoon-card">
                <div class="p-8">
                    <h2 class="text-3xl font-bold mb-6 squiggle font-cartoon">"Get In Touch"</h2>
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-6 mb-8">
                        {content()
                            .contacts
                            .iter()
                            .map(|entry| view! { <ContactCard entry /> })
                            .collect_view()}
                    </div>
                    <ContactForm />
                </div>
            </div>
        </Reveal>
    }
}

fn contact_icon(icon: ContactIcon) -> &'static str {
    match icon {
        ContactIcon::Email => "✉️",
        ContactIcon::Phone => "📞",
        ContactIcon::Location => "📍",
    }
}

#[component]
fn ContactCard(entry: &'static ContactEntry) -> impl IntoView {
    view! {
        <a href=entry.href() class="block group contact-card">
            <div class="bg-white rounded-xl cartoon-card p-6 text-center wiggle">
                <div class=format!(
                    "w-16 h-16 rounded-full bg-gradient-to-r {} mx-auto flex items-center justify-center mb-4 border-4 border-black text-2xl",
                    entry.color,
                )>{contact_icon(entry.icon)}</div>
                <h3 class="text-lg font-bold mb-1 font-cartoon">{entry.title.as_str()}</h3>
                <p class="group-hover:text-[#FF6B6B] transition-colors font-medium">
                    {entry.content.as_str()}
                </p>
            </div>
        </a>
    }
}

const FIELD_CLASS: &str = "w-full px-4 py-3 bg-white border-4 border-black rounded-xl focus:outline-none focus:ring-2 focus:ring-[#FF6B6B] cartoon-shadow";

/// Hands the message to the visitor's mail client; nothing is posted.
#[component]
fn ContactForm() -> impl IntoView {
    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let (error, set_error) = signal(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(name), Some(email), Some(message)) = (
            name_ref.get_untracked(),
            email_ref.get_untracked(),
            message_ref.get_untracked(),
        ) else {
            return;
        };
        let msg = ContactMessage::new(&name.value(), &email.value(), &message.value());
        match msg.mailto_href(&content().contact_form) {
            Ok(href) => {
                set_error.set(None);
                if let Err(e) = window().location().set_href(&href) {
                    log::error!("couldn't open mail client: {e:?}");
                    set_error.set(Some("Couldn't open your mail client".to_string()));
                }
            }
            Err(e) => {
                log::debug!("contact form rejected: {e}");
                set_error.set(Some(e.to_string()));
            }
        }
    };

    view! {
        <form class="space-y-6" on:submit=on_submit novalidate=true>
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                <div>
                    <label for="name" class="block text-md font-bold mb-1">
                        "Name"
                    </label>
                    <input
                        node_ref=name_ref
                        type="text"
                        id="name"
                        class=FIELD_CLASS
                        placeholder="Your Name"
                    />
                </div>
                <div>
                    <label for="email" class="block text-md font-bold mb-1">
                        "Email"
                    </label>
                    <input
                        node_ref=email_ref
                        type="email"
                        id="email"
                        class=FIELD_CLASS
                        placeholder="your.email@example.com"
                    />
                </div>
            </div>
            <div>
                <label for="message" class="block text-md font-bold mb-1">
                    "Message"
                </label>
                <textarea
                    node_ref=message_ref
                    id="message"
                    rows="5"
                    class=FIELD_CLASS
                    placeholder="Your message here..."
                ></textarea>
            </div>
            {move || {
                error
                    .get()
                    .map(|e| {
                        view! {
                            <p class="text-[#FF6B6B] font-bold" role="alert">
                                {e}
                            </p>
                        }
                    })
            }}
            <button type="submit" class="bubble-button wiggle">
                "Send Message"
            </button>
        </form>
    }
}
