//! Row types mapping the survey schema to and from Diesel.

use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{classifiertype, classifiertypeselector, legalbasis, survey};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = survey)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SurveyRow {
    pub surveypk: i32,
    pub id: Uuid,
    pub shortname: String,
    pub longname: String,
    pub surveyref: String,
    pub legalbasis: String,
    pub surveytype: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = survey)]
pub struct NewSurveyRow<'a> {
    pub id: Uuid,
    pub shortname: &'a str,
    pub longname: &'a str,
    pub surveyref: &'a str,
    pub legalbasis: &'a str,
    pub surveytype: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = legalbasis)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LegalBasisRow {
    pub ref_: String,
    pub longname: String,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = classifiertypeselector)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct SelectorRow {
    pub classifiertypeselectorpk: i32,
    pub id: Uuid,
    pub surveyfk: i32,
    pub selectorname: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = classifiertypeselector)]
pub struct NewSelectorRow<'a> {
    pub id: Uuid,
    pub surveyfk: i32,
    pub selectorname: &'a str,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = classifiertype)]
pub struct NewClassifierTypeRow<'a> {
    pub classifiertypeselectorfk: i32,
    pub classifiertype: &'a str,
}
