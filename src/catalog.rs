//! Static catalogs
//!
//! The journey steps and OSI layers are fixed, process-wide tables. They are
//! only reachable through the read accessors below; nothing can mutate them.

use crate::models::{JourneyStep, LayerColor, LayerId, OsiLayer, StepIcon, StepId, SubStep};

static JOURNEY_STEPS: [JourneyStep; 7] = [
    JourneyStep {
        id: StepId(1),
        category: "Physical Input",
        icon: StepIcon::Keyboard,
        sub_steps: &[
            SubStep {
                id: "1a",
                name: "Key Matrix Activation",
                description: "Electrons flow through keyboard matrix when key is pressed",
            },
            SubStep {
                id: "1b",
                name: "Signal Generation",
                description: "Key press creates electrical signal in keyboard controller",
            },
            SubStep {
                id: "1c",
                name: "Digital Conversion",
                description: "Analog signal converted to digital keycode",
            },
        ],
    },
    JourneyStep {
        id: StepId(2),
        category: "Input Processing",
        icon: StepIcon::Zap,
        sub_steps: &[
            SubStep {
                id: "2a",
                name: "USB Protocol",
                description: "Digital signal transmitted via USB protocol to computer",
            },
            SubStep {
                id: "2b",
                name: "Interrupt Handler",
                description: "CPU receives hardware interrupt from USB controller",
            },
            SubStep {
                id: "2c",
                name: "Driver Processing",
                description: "Keyboard driver processes the keycode",
            },
        ],
    },
    JourneyStep {
        id: StepId(3),
        category: "OS & Browser",
        icon: StepIcon::Server,
        sub_steps: &[
            SubStep {
                id: "3a",
                name: "OS Event Queue",
                description: "Keypress event added to OS event queue",
            },
            SubStep {
                id: "3b",
                name: "Browser Processing",
                description: "Browser receives and processes keypress event",
            },
            SubStep {
                id: "3c",
                name: "URL Parsing",
                description: "Browser parses URL components (protocol, domain, path)",
            },
        ],
    },
    JourneyStep {
        id: StepId(4),
        category: "DNS Resolution",
        icon: StepIcon::Globe,
        sub_steps: &[
            SubStep {
                id: "4a",
                name: "Local DNS Cache",
                description: "Browser checks local DNS cache",
            },
            SubStep {
                id: "4b",
                name: "Recursive DNS",
                description: "Query sent to recursive DNS resolver (ISP/8.8.8.8)",
            },
            SubStep {
                id: "4c",
                name: "Root NS Query",
                description: "Resolver queries root nameservers for TLD servers",
            },
            SubStep {
                id: "4d",
                name: "TLD NS Query",
                description: "TLD nameservers queried for authoritative nameservers",
            },
            SubStep {
                id: "4e",
                name: "Auth NS Query",
                description: "Authoritative nameservers return final IP address",
            },
        ],
    },
    JourneyStep {
        id: StepId(5),
        category: "Network Connection",
        icon: StepIcon::Network,
        sub_steps: &[
            SubStep {
                id: "5a",
                name: "TCP Handshake",
                description: "Client initiates TCP 3-way handshake with server",
            },
            SubStep {
                id: "5b",
                name: "TLS Setup",
                description: "TLS negotiation for HTTPS encryption",
            },
        ],
    },
    JourneyStep {
        id: StepId(6),
        category: "CDN & Security",
        icon: StepIcon::Cloud,
        sub_steps: &[
            SubStep {
                id: "6a",
                name: "Cloudflare Edge",
                description: "Request hits nearest Cloudflare edge server",
            },
            SubStep {
                id: "6b",
                name: "DDoS Protection",
                description: "Traffic analyzed for DDoS patterns",
            },
            SubStep {
                id: "6c",
                name: "WAF Rules",
                description: "Web Application Firewall checks request against security rules",
            },
            SubStep {
                id: "6d",
                name: "Cache Check",
                description: "CDN checks if content is cached at edge",
            },
        ],
    },
    JourneyStep {
        id: StepId(7),
        category: "Origin Server",
        icon: StepIcon::Database,
        sub_steps: &[
            SubStep {
                id: "7a",
                name: "Load Balancer",
                description: "Request distributed across server pool",
            },
            SubStep {
                id: "7b",
                name: "Application Server",
                description: "Web server processes request",
            },
            SubStep {
                id: "7c",
                name: "Response Journey",
                description: "Response travels back through CDN to user",
            },
        ],
    },
];

// Listed top-down, the way the model is usually drawn.
static OSI_LAYERS: [OsiLayer; 7] = [
    OsiLayer {
        id: LayerId(7),
        name: "Application",
        color: LayerColor::Purple,
        description: Some("Protocols the browser speaks, such as HTTP and DNS"),
    },
    OsiLayer {
        id: LayerId(6),
        name: "Presentation",
        color: LayerColor::Indigo,
        description: Some("Encoding, compression and TLS encryption of the payload"),
    },
    OsiLayer {
        id: LayerId(5),
        name: "Session",
        color: LayerColor::Blue,
        description: Some("Opening, keeping and closing the conversation with a server"),
    },
    OsiLayer {
        id: LayerId(4),
        name: "Transport",
        color: LayerColor::Green,
        description: Some("Reliable delivery between ports with TCP or UDP"),
    },
    OsiLayer {
        id: LayerId(3),
        name: "Network",
        color: LayerColor::Yellow,
        description: Some("IP addressing and routing across networks"),
    },
    OsiLayer {
        id: LayerId(2),
        name: "Data Link",
        color: LayerColor::Orange,
        description: Some("Frames between neighbouring devices, MAC addresses"),
    },
    OsiLayer {
        id: LayerId(1),
        name: "Physical",
        color: LayerColor::Red,
        description: Some("Electrical signals on the wire, radio or fibre"),
    },
];

/// All journey steps, ordered by identifier
pub fn journey_steps() -> &'static [JourneyStep] {
    &JOURNEY_STEPS
}

/// All OSI layers, ordered from Application (7) down to Physical (1)
pub fn osi_layers() -> &'static [OsiLayer] {
    &OSI_LAYERS
}

/// Look up a journey step by identifier
pub fn journey_step(id: StepId) -> Option<&'static JourneyStep> {
    JOURNEY_STEPS.iter().find(|step| step.id == id)
}

/// Look up an OSI layer by identifier
pub fn osi_layer(id: LayerId) -> Option<&'static OsiLayer> {
    OSI_LAYERS.iter().find(|layer| layer.id == id)
}

/// Sub-steps of a journey step in display order
///
/// An identifier that matches no catalog entry yields an empty slice.
pub fn sub_steps(id: StepId) -> &'static [SubStep] {
    journey_step(id).map(|step| step.sub_steps).unwrap_or(&[])
}
