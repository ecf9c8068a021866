use gradmap::core::Program;

/// Test builder with sensible defaults; every test overrides only what it
/// is about.
pub struct ProgramBuilder {
    program: Program,
}

#[allow(dead_code)] // not every integration binary uses every setter
impl ProgramBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            program: Program {
                id: id.to_string(),
                name: format!("Program {id}"),
                university: "UPM".to_string(),
                city: "Madrid".to_string(),
                modality: "on-site".to_string(),
                language: "es".to_string(),
                duration_months: 12.0,
                total_price_eur: 12_000.0,
                credits_ects: 60.0,
                curriculum: String::new(),
                keywords: String::new(),
                practical_focus: 3.0,
                internship_offered: false,
                analytic_pct: 50.0,
                managerial_pct: 50.0,
                employment_rate_6m: None,
                partner_network_size: None,
                consultant_analysis: String::new(),
                career_path: String::new(),
                pros: String::new(),
                cons: String::new(),
                official_link: String::new(),
                imputed_fields: Vec::new(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.program.name = name.to_string();
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.program.city = city.to_string();
        self
    }

    pub fn modality(mut self, modality: &str) -> Self {
        self.program.modality = modality.to_string();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.program.total_price_eur = price;
        self
    }

    pub fn credits(mut self, credits: f64) -> Self {
        self.program.credits_ects = credits;
        self
    }

    pub fn keywords(mut self, keywords: &str) -> Self {
        self.program.keywords = keywords.to_string();
        self
    }

    pub fn focus(mut self, analytic: f64, managerial: f64) -> Self {
        self.program.analytic_pct = analytic;
        self.program.managerial_pct = managerial;
        self
    }

    pub fn practical(mut self, rating: f64, internship: bool) -> Self {
        self.program.practical_focus = rating;
        self.program.internship_offered = internship;
        self
    }

    pub fn employability(mut self, rate: f64, network: f64) -> Self {
        self.program.employment_rate_6m = Some(rate);
        self.program.partner_network_size = Some(network);
        self
    }

    pub fn build(self) -> Program {
        self.program
    }
}
