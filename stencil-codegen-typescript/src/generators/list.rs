//! List component generator.

use std::path::{Path, PathBuf};

use stencil_codegen::Indent;
use stencil_core::{
    Config, GeneratedFile, PathsConfig, Result, Storage, plural, relative_import_path,
    to_camel_case, to_pascal_case,
};

use super::{GenerateReport, SourceFile};
use crate::model::{FileModel, ImportKind, Parameter};

/// Emits `<Model>List.tsx`, a data table over one model.
#[derive(Debug, Clone)]
pub struct ListGenerator {
    model: String,
    fields: Vec<String>,
    paths: PathsConfig,
    indent: Indent,
}

impl ListGenerator {
    pub fn new(model: &str, project: &Config) -> Self {
        Self {
            model: to_pascal_case(model),
            fields: Vec::new(),
            paths: project.paths.clone(),
            indent: Indent::from_width(project.project.indent),
        }
    }

    /// Model fields shown as table columns, in order.
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    fn instance(&self) -> String {
        to_camel_case(&self.model)
    }

    /// Directory of the component, relative to the project root.
    pub fn dir(&self) -> PathBuf {
        self.paths.components.join(self.instance())
    }

    pub fn build(&self) -> Result<SourceFile> {
        let model = &self.model;
        let instance = self.instance();
        let records = plural(&instance);
        let set_records = format!("set{}", to_pascal_case(&records));
        let name = format!("{model}List");
        let props = format!("I{name}Props");
        let dir = self.dir();
        let client_root = self.paths.components.parent().unwrap_or(Path::new(""));

        let mut file = FileModel::new(&name).with_indent(self.indent);
        file.add_import(["React"], "react", ImportKind::Default)
            .add_import(["ComponentType", "useState", "useEffect"], "react", ImportKind::Module)
            .add_import(["IComponentProps", "IColumn"], "@vesta/components", ImportKind::Module)
            .add_import(["IColumn", "DataTable", "IQueryOption"], "@vesta/components", ImportKind::Module)
            .add_import(
                [format!("I{model}")],
                &relative_import_path(&dir, &self.paths.models.join(model)),
                ImportKind::Module,
            )
            .add_import(
                ["DataTableOperations"],
                &relative_import_path(&dir, &self.paths.components.join("general/DataTableOperations")),
                ImportKind::Module,
            )
            .add_import(
                ["getCrudInstance"],
                &relative_import_path(&dir, &client_root.join("service/Crud")),
                ImportKind::Module,
            );

        file.add_interface(&props).set_parent("IComponentProps");

        // Column lines share the indentation of the text they are spliced into.
        let columns: String = self
            .fields
            .iter()
            .map(|f| {
                format!(
                    "\n                {{ name: \"{f}\", title: \"{}\" }},",
                    to_pascal_case(f)
                )
            })
            .collect();

        let component = file.add_function(&name);
        component
            .set_arrow(true)
            .set_binding_type(format!("ComponentType<{props}>"))
            .add_parameter(Parameter::new("props", &props))?;
        component.append_content(format!(
            r#"
            const [service] = useState(getCrudInstance<I{model}>("{instance}"));
            const [{records}, {set_records}] = useState<I{model}[]>([]);
            const [queryOption, setQueryOption] = useState({{}});"#
        ));
        component.append_content(format!(
            r#"
            const columns: IColumn<I{model}>[] = [{columns}
                {{
                    render: (r: I{model}) => <DataTableOperations path="{instance}" id={{r.id}} onDelete={{onDelete}} />,
                    title: "Operations",
                }},
            ];

            useEffect(() => onFetch(queryOption), []);

            return (
                <div className="crud-page">
                    <DataTable queryOption={{queryOption}} columns={{columns}} records={{{records}}}
                        onPagination={{onFetch}} pagination={{true}} />
                </div>
            );"#
        ));

        component
            .add_inner_function("onFetch")
            .add_parameter(Parameter::new("option", format!("IQueryOption<I{model}>")).optional())?
            .append_content(format!(
                r#"
                if (!option) {{
                    option = queryOption;
                }}
                setQueryOption(option);
                service.fetchAll(option).then({set_records});"#
            ));
        component
            .add_inner_function("onDelete")
            .add_parameter(Parameter::new("id", "number"))?
            .append_content("service.remove(id).then((deleted: boolean) => deleted ? onFetch() : null);");

        Ok(SourceFile::new(dir, file, "tsx"))
    }

    pub fn generate(&self, storage: &dyn Storage, base: &Path) -> Result<GenerateReport> {
        let source = self.build()?;
        let mut report = GenerateReport::default();
        let path = source.path(base);
        report.record_write(path, source.write(storage, base)?);
        Ok(report)
    }
}
