use crate::domain::entities::Statute;
use crate::domain::errors::DomainResult;
use crate::domain::ports::statute_repository::StatuteRepository;

const PLANALTO: &str = "https://www.planalto.gov.br/ccivil_03";

/// Statute dataset held in memory, fixed at construction
#[derive(Debug, Clone)]
pub struct InMemoryStatuteRepository {
    statutes: Vec<Statute>,
}

impl InMemoryStatuteRepository {
    pub fn new() -> Self {
        Self::with_statutes(default_statutes())
    }

    pub fn with_statutes(statutes: Vec<Statute>) -> Self {
        Self { statutes }
    }
}

impl Default for InMemoryStatuteRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait::async_trait]
impl StatuteRepository for InMemoryStatuteRepository {
    async fn list_statutes(&self) -> DomainResult<Vec<Statute>> {
        Ok(self.statutes.clone())
    }

    async fn get_statute(&self, id: &str) -> DomainResult<Option<Statute>> {
        Ok(self.statutes.iter().find(|s| s.id == id).cloned())
    }
}

fn default_statutes() -> Vec<Statute> {
    [
        ("cf88", "Constituição da República Federativa do Brasil", "CF/88", "constituicao/constituicao.htm"),
        ("cc", "Código Civil", "CC", "leis/2002/l10406compilada.htm"),
        ("cpc", "Código de Processo Civil", "CPC", "_ato2015-2018/2015/lei/l13105.htm"),
        ("cp", "Código Penal", "CP", "decreto-lei/del2848compilado.htm"),
        ("cpp", "Código de Processo Penal", "CPP", "decreto-lei/del3689compilado.htm"),
        ("clt", "Consolidação das Leis do Trabalho", "CLT", "decreto-lei/del5452compilado.htm"),
        ("cdc", "Código de Defesa do Consumidor", "CDC", "leis/l8078compilado.htm"),
        ("eca", "Estatuto da Criança e do Adolescente", "ECA", "leis/l8069compilado.htm"),
        ("ctn", "Código Tributário Nacional", "CTN", "leis/l5172compilado.htm"),
        ("jec", "Lei dos Juizados Especiais Cíveis e Criminais", "Lei 9.099/95", "leis/l9099.htm"),
        ("inquilinato", "Lei do Inquilinato", "Lei 8.245/91", "leis/l8245.htm"),
    ]
    .iter()
    .map(|(id, name, abbreviation, path)| {
        Statute::new(id, name, abbreviation, &format!("{}/{}", PLANALTO, path))
    })
    .collect()
}
