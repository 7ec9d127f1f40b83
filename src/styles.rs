use crate::dom::Dom;

pub const INTERACTION_STYLES_ID: &str = "interaction-styles";
pub const PARTICLE_STYLES_ID: &str = "particle-styles";
pub const RIPPLE_STYLES_ID: &str = "ripple-styles";

pub const INTERACTION_STYLES: &str = r#"
    .project-card.touch-active {
        transform: translateY(-5px) scale(1.02) !important;
        box-shadow: 0 15px 30px rgba(0, 204, 255, 0.2) !important;
    }

    .nav-link.active {
        color: var(--neon-blue) !important;
        text-shadow: 0 0 10px var(--neon-blue) !important;
    }

    .nav-link.active::after {
        width: 100% !important;
    }

    body:not(.loaded) * {
        animation-play-state: paused !important;
    }

    .hamburger.active .bar:nth-child(1) {
        transform: rotate(45deg) translate(6px, 6px);
    }

    .hamburger.active .bar:nth-child(2) {
        opacity: 0;
    }

    .hamburger.active .bar:nth-child(3) {
        transform: rotate(-45deg) translate(6px, -6px);
    }

    @media (max-width: 768px) {
        .floating-cloud, .server-rack {
            display: none;
        }

        .hero-visual {
            transform: scale(0.8);
        }

        .project-card {
            height: auto;
        }

        .project-card:hover .project-card-inner {
            transform: none;
        }

        .project-back {
            position: relative;
            transform: none;
            margin-top: 1rem;
            height: auto;
        }
    }
"#;

pub const PARTICLE_STYLES: &str = r#"
    @keyframes particleFloat {
        0%, 100% {
            transform: translateY(0px) translateX(0px) scale(1);
            opacity: 0.7;
        }
        25% {
            transform: translateY(-20px) translateX(10px) scale(1.2);
            opacity: 1;
        }
        50% {
            transform: translateY(-10px) translateX(-5px) scale(0.8);
            opacity: 0.5;
        }
        75% {
            transform: translateY(-30px) translateX(15px) scale(1.1);
            opacity: 0.9;
        }
    }
"#;

pub const RIPPLE_STYLES: &str = r#"
    @keyframes ripple {
        to {
            transform: scale(2);
            opacity: 0;
        }
    }
"#;

/// Injects a stylesheet once; later calls with the same id are no-ops.
pub fn ensure_style<D: Dom>(dom: &D, id: &str, css: &str) {
    if dom.element_by_id(id).is_none() {
        dom.inject_style(id, css);
    }
}

pub fn set_styles<D: Dom>(dom: &D, element: &D::Element, declarations: &[(&str, &str)]) {
    for (property, value) in declarations {
        dom.set_style(element, property, value);
    }
}

/// Composes `fragment` onto the element's current transform. Repeated calls
/// accumulate rather than replace.
pub fn append_transform<D: Dom>(dom: &D, element: &D::Element, fragment: &str) {
    let current = dom.style(element, "transform");
    if current.is_empty() {
        dom.set_style(element, "transform", fragment);
    } else {
        dom.set_style(element, "transform", &format!("{current} {fragment}"));
    }
}

/// Shortest round-trip form, with negative zero printed as `0`.
pub fn css_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{value}")
    }
}
