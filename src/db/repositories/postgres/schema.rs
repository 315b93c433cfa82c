// Survey schema tables, managed by the embedded migrations.

diesel::table! {
    survey.legalbasis (ref_) {
        #[sql_name = "ref"]
        ref_ -> Varchar,
        longname -> Varchar,
    }
}

diesel::table! {
    survey.survey (surveypk) {
        surveypk -> Int4,
        id -> Uuid,
        shortname -> Varchar,
        longname -> Varchar,
        surveyref -> Varchar,
        legalbasis -> Varchar,
        surveytype -> Varchar,
    }
}

diesel::table! {
    survey.classifiertypeselector (classifiertypeselectorpk) {
        classifiertypeselectorpk -> Int4,
        id -> Uuid,
        surveyfk -> Int4,
        selectorname -> Varchar,
    }
}

diesel::table! {
    survey.classifiertype (classifiertypepk) {
        classifiertypepk -> Int4,
        classifiertypeselectorfk -> Int4,
        classifiertype -> Varchar,
    }
}

diesel::joinable!(survey -> legalbasis (legalbasis));
diesel::joinable!(classifiertypeselector -> survey (surveyfk));
diesel::joinable!(classifiertype -> classifiertypeselector (classifiertypeselectorfk));

diesel::allow_tables_to_appear_in_same_query!(
    classifiertype,
    classifiertypeselector,
    legalbasis,
    survey,
);
