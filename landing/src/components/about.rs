use leptos::prelude::*;

/// Title and body of each "What we do" item, left to right.
const FEATURES: [(&str, &str); 3] = [
    (
        "Investigate ideas",
        "Learn about global challenges and explore which causes matter most.",
    ),
    (
        "Community",
        "Join a group of like-minded people and collaborate to create change.",
    ),
    (
        "Taking action",
        "Apply EA principles in your career, research, or projects for impact.",
    ),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="about" class="border-top">
            <div class="container">
                <h2 class="section-title centered text-accent">"What we do"</h2>
                <p class="section-body centered">
                    "Impact Makers Utrecht is a student organisation helping students influence \
                     the world in the most positive way. We run programs, discussions, and social \
                     events to connect like-minded people and explore impactful ideas."
                </p>
                <div class="feature-grid">
                    {FEATURES.into_iter().map(|(title, body)| {
                        view! {
                            <div class="feature">
                                <h3 class="feature-title">{title}</h3>
                                <p class="feature-body">{body}</p>
                            </div>
                        }
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
