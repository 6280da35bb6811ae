//! Keyword-matched FAQ responder for the website chat widget.
//!
//! An ordered table of intents; the first intent with any keyword contained in
//! the lowercased message wins. No language understanding beyond that.

/// Greeting shown when a conversation opens.
pub const GREETING: &str = "Bienvenido a nuestro servicio de atención al cliente.";

/// Reply when no intent matches.
pub const FALLBACK_REPLY: &str = "No entendí completamente. ¿Podrías ser más específico?";

/// A set of trigger keywords and the canned reply they select.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent {
    /// Short name, used in logs.
    pub name: &'static str,
    /// Lowercase substrings that select this intent.
    pub keywords: &'static [&'static str],
    /// Reply text.
    pub response: &'static str,
}

impl Intent {
    /// Returns true if any keyword occurs in `lowercase_message`.
    #[must_use]
    pub fn matches(&self, lowercase_message: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| lowercase_message.contains(keyword))
    }
}

/// Intents in priority order.
pub const INTENTS: &[Intent] = &[
    Intent {
        name: "pricing",
        keywords: &["precio", "costo", "valor", "tarifa"],
        response: "Nuestros servicios de desarrollo de software comienzan desde $500 mensuales, con planes personalizados según las necesidades de tu proyecto. Te ayudamos a optimizar tus costos con soluciones eficientes y escalables.",
    },
    Intent {
        name: "process",
        keywords: &["trabajar", "proceso", "metodología", "como trabajan"],
        response: "Nuestro proceso consta de 4 etapas claras: \n1. **Diagnóstico**: Analizamos tus necesidades específicas y objetivos del proyecto. \n2. **Propuesta**: Diseñamos una solución personalizada y flexible. \n3. **Implementación**: Desarrollamos e integramos el software utilizando metodologías ágiles como Scrum. \n4. **Seguimiento**: Ofrecemos soporte continuo y mejoras basadas en tus comentarios.",
    },
    Intent {
        name: "contact",
        keywords: &["contactar", "contacto", "comunicarse", "número", "correo"],
        response: "Puedes comunicarte con nosotros a través de los siguientes canales:\n- Teléfono: +51 997138092 \n- Correo electrónico: adriefape@gmail.com\n- También estamos disponibles para agendar reuniones virtuales a través de Zoom o Google Meet.",
    },
    Intent {
        name: "services",
        keywords: &["servicio", "que ofrecen", "servicios"],
        response: "Nuestros servicios incluyen:\n- **Consultoría tecnológica**: Identificamos oportunidades para mejorar tus procesos con tecnología.\n- **Desarrollo de software a medida**: Creamos aplicaciones web y móviles adaptadas a tus requerimientos.\n- **Estrategias digitales**: Implementamos soluciones para optimizar la presencia digital de tu negocio.",
    },
    Intent {
        name: "technology",
        keywords: &["tecnología", "herramientas", "lenguajes", "frameworks"],
        response: "Trabajamos con tecnologías modernas como Python, Flask, Django, JavaScript, React, Angular, Node.js, y bases de datos como MySQL y PostgreSQL. Elegimos las herramientas ideales según la complejidad de tu proyecto.",
    },
    Intent {
        name: "timeline",
        keywords: &["tiempo", "duración", "cuanto tarda", "entrega"],
        response: "El tiempo de entrega depende de la complejidad del proyecto. En promedio, proyectos pequeños toman entre 4 y 6 semanas, mientras que desarrollos más avanzados pueden requerir entre 3 y 6 meses. Garantizamos cumplir con los plazos acordados.",
    },
    Intent {
        name: "security",
        keywords: &["seguridad", "datos", "protección", "confidencialidad"],
        response: "Priorizamos la seguridad de tus datos con estándares como encriptación, autenticación robusta y firewalls. Además, firmamos acuerdos de confidencialidad (NDA) para garantizar la protección de tu información.",
    },
    Intent {
        name: "hosting",
        keywords: &["hosting", "dominio", "servidores", "infraestructura"],
        response: "Te ayudamos a configurar tu hosting y dominio, ofreciendo opciones escalables en servicios como AWS, Google Cloud, o servicios compartidos según tus necesidades.",
    },
    Intent {
        name: "support",
        keywords: &["soporte", "mantenimiento", "ayuda", "errores"],
        response: "Ofrecemos soporte técnico y mantenimiento post-desarrollo, asegurando que tu software esté actualizado, libre de errores y funcionando al máximo rendimiento.",
    },
    Intent {
        name: "mobile",
        keywords: &["app móvil", "aplicaciones móviles", "android", "ios"],
        response: "Desarrollamos aplicaciones móviles nativas y multiplataforma para Android e iOS, utilizando tecnologías como React Native y Flutter para garantizar un rendimiento óptimo y una excelente experiencia de usuario.",
    },
    Intent {
        name: "integrations",
        keywords: &["integración", "api", "apis", "sistemas externos"],
        response: "Implementamos integraciones con APIs de terceros, como sistemas de pago (PayPal, Stripe), CRMs, ERPs y más, para extender la funcionalidad de tu software.",
    },
    Intent {
        name: "ecommerce",
        keywords: &["ecommerce", "tienda online", "venta digital"],
        response: "Creamos soluciones de comercio electrónico personalizadas, integrando pasarelas de pago, gestión de inventarios y diseño responsive para maximizar tus ventas.",
    },
    Intent {
        name: "portfolio",
        keywords: &["proyectos pasados", "portafolio", "clientes", "experiencia"],
        response: "Hemos trabajado con empresas de diversas industrias, desarrollando soluciones como plataformas educativas, sistemas de gestión empresarial y aplicaciones móviles. Solicítanos nuestro portafolio para más detalles.",
    },
    Intent {
        name: "automation",
        keywords: &["automatización", "procesos", "optimización", "robotización"],
        response: "Te ayudamos a automatizar procesos repetitivos en tu empresa mediante soluciones de software personalizadas, reduciendo costos y aumentando la eficiencia operativa.",
    },
    Intent {
        name: "design",
        keywords: &["diseño", "interfaz", "ux", "experiencia de usuario"],
        response: "Nuestro enfoque en diseño UX/UI asegura que tu aplicación sea intuitiva, atractiva y fácil de usar, optimizando la experiencia de los usuarios finales.",
    },
];

/// Finds the first intent matching `message`, if any.
#[must_use]
pub fn detect_intent(message: &str) -> Option<&'static Intent> {
    let lowered = message.to_lowercase();
    INTENTS.iter().find(|intent| intent.matches(&lowered))
}

/// Reply for `message`, falling back to [`FALLBACK_REPLY`].
#[must_use]
pub fn respond(message: &str) -> &'static str {
    detect_intent(message).map_or(FALLBACK_REPLY, |intent| intent.response)
}
