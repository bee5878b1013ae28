//! JSON wire types.
//!
//! Field names on the wire follow the established Portuguese vocabulary of the candidate
//! registry (`nome`, `data_nasc`, `tipo_sanguineo`, ...). Rust-side names are English.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

/// Health check response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Treats an explicit JSON `null` like an absent key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A registered candidate.
///
/// `id` is assigned by storage and is absent on candidates supplied for ad hoc analysis.
/// Omitted or `null` fields default to zero or empty, so any JSON object is accepted here;
/// validation happens in the service layer.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Candidate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(rename = "nome", default, deserialize_with = "null_as_default")]
    pub name: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub cpf: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub rg: String,

    /// Birth date, `dd/MM/yyyy`.
    #[serde(rename = "data_nasc", default, deserialize_with = "null_as_default")]
    #[schema(example = "01/01/2000")]
    pub birth_date: String,

    #[serde(rename = "sexo", default, deserialize_with = "null_as_default")]
    #[schema(example = "masculino")]
    pub sex: String,

    #[serde(rename = "mae", default, deserialize_with = "null_as_default")]
    pub mother: String,

    #[serde(rename = "pai", default, deserialize_with = "null_as_default")]
    pub father: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,

    #[serde(rename = "cep", default)]
    pub postcode: Option<String>,

    #[serde(rename = "endereco", default)]
    pub address: Option<String>,

    #[serde(rename = "numero", default, deserialize_with = "null_as_default")]
    pub number: i32,

    #[serde(rename = "bairro", default)]
    pub district: Option<String>,

    #[serde(rename = "cidade", default)]
    pub city: Option<String>,

    #[serde(rename = "estado", default, deserialize_with = "null_as_default")]
    #[schema(example = "SP")]
    pub state: String,

    #[serde(rename = "telefone_fixo", default)]
    pub landline: Option<String>,

    #[serde(rename = "celular", default)]
    pub mobile: Option<String>,

    /// Height in metres.
    #[serde(rename = "altura", default, deserialize_with = "null_as_default")]
    pub height: f64,

    /// Weight in kilograms.
    #[serde(rename = "peso", default, deserialize_with = "null_as_default")]
    pub weight: f64,

    #[serde(rename = "tipo_sanguineo", default)]
    #[schema(example = "O-")]
    pub blood_type: Option<String>,
}

/// Composite analysis report.
///
/// Count-valued reports are integral; average and percentage reports are rounded to two
/// decimal places.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AnalysisRes {
    #[serde(rename = "candidatosPorEstado")]
    pub candidates_by_state: BTreeMap<String, u64>,

    #[serde(rename = "imcMedioPorFaixaEtaria")]
    pub mean_bmi_by_age_bracket: BTreeMap<String, f64>,

    #[serde(rename = "percentualObesos")]
    pub obesity_percentage_by_sex: BTreeMap<String, f64>,

    #[serde(rename = "mediaIdadePorTipoSanguineo")]
    pub mean_age_by_blood_type: BTreeMap<String, f64>,

    #[serde(rename = "possiveisDoadores")]
    pub possible_donors: BTreeMap<String, u64>,
}

/// Response to deleting every stored candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DeleteCandidatesRes {
    pub message: String,
}

/// Error body returned for client and server failures.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorRes {
    pub error: String,
}
