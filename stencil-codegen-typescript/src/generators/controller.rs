//! Page controller generator.
//!
//! A controller is assembled by several independent passes over the same
//! [`FileModel`]: base class wiring, ACL registration, optional model-backed
//! CRUD wiring, scope typing and dependency injection. Each pass reaches the
//! class, constructor and methods through the model's get-or-create
//! accessors.

use std::{
    fmt,
    path::{Path, PathBuf},
    str::FromStr,
};

use stencil_codegen::{Indent, Placeholder, Splice, marker_indent, splice_file};
use stencil_core::{
    Config, Error, GeneratedFile, PathsConfig, Result, Storage, plural, relative_import_path,
    to_camel_case, to_kebab_case, to_pascal_case,
};

use super::{
    GenerateReport, SourceFile,
    aggregator::{AggregatorKind, register_in_aggregator},
    injector::{Injectable, inject},
    sass::{SassGenerator, SassKind},
};
use crate::model::{FileModel, ImportKind, Parameter, Property};

/// What a controller is for. Decides its permissions and, with a model, its
/// CRUD wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControllerKind {
    #[default]
    List,
    Add,
    Edit,
}

impl ControllerKind {
    fn actions(&self) -> &'static str {
        match self {
            Self::List => "'read'",
            Self::Add => "'read', 'add'",
            Self::Edit => "'read', 'update'",
        }
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::List => "list",
            Self::Add => "add",
            Self::Edit => "edit",
        };
        f.write_str(s)
    }
}

impl FromStr for ControllerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "list" => Ok(Self::List),
            "add" => Ok(Self::Add),
            "edit" => Ok(Self::Edit),
            _ => Err(Error::UnknownKind {
                what: "controller kind",
                value: s.to_string(),
                expected: "list, add, edit",
            }),
        }
    }
}

/// Input of the controller generator.
#[derive(Debug, Clone, Default)]
pub struct ControllerConfig {
    pub name: String,
    pub module: Option<String>,
    /// Model the controller manages, optionally prefixed by its directory
    /// (`user/User`).
    pub model: Option<String>,
    pub kind: ControllerKind,
    /// Type `$scope` with a dedicated interface.
    pub scope: bool,
    pub injects: Vec<Injectable>,
}

impl ControllerConfig {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Builds a controller and wires it into the route table and the import
/// aggregator.
#[derive(Debug, Clone)]
pub struct ControllerGenerator {
    config: ControllerConfig,
    paths: PathsConfig,
    indent: Indent,
    /// camelCase name without a `Controller` suffix.
    ctrl_name: String,
}

impl ControllerGenerator {
    pub fn new(config: ControllerConfig, project: &Config) -> Self {
        let ctrl_name = normalize_name(&config.name);
        Self {
            config,
            paths: project.paths.clone(),
            indent: Indent::from_width(project.project.indent),
            ctrl_name,
        }
    }

    /// Directory the controller is written to, relative to the project root.
    pub fn dir(&self) -> PathBuf {
        let mut dir = self.paths.modules.clone();
        if let Some(module) = &self.config.module {
            dir.push(module);
        }
        if self.config.model.is_some() {
            dir.push(&self.ctrl_name);
        }
        dir
    }

    /// Router state, `module.name` or `name`.
    pub fn state_name(&self) -> String {
        match &self.config.module {
            Some(module) => format!("{module}.{}", self.ctrl_name),
            None => self.ctrl_name.clone(),
        }
    }

    fn edge(&self) -> String {
        match &self.config.module {
            Some(module) => format!("{module}/{}", self.ctrl_name),
            None => self.ctrl_name.clone(),
        }
    }

    fn import_from(&self, target: PathBuf) -> String {
        relative_import_path(&self.dir(), &target)
    }

    /// Build the controller source without touching storage.
    pub fn build(&self) -> Result<SourceFile> {
        let class_name = format!("{}Controller", to_pascal_case(&self.ctrl_name));
        let mut file = FileModel::new(&class_name).with_indent(self.indent);
        {
            let class = file.main_class_mut();
            class.set_parent("BaseController");
            class.constructor_mut().set_content("super();");
        }
        file.add_import(
            ["BaseController"],
            &self.import_from(self.paths.modules.join("BaseController")),
            ImportKind::Module,
        );
        self.add_acl(&mut file)?;

        let mut injects: Vec<Injectable> = self
            .config
            .injects
            .iter()
            .filter(|i| i.name != "$scope")
            .cloned()
            .collect();
        injects.push(Injectable::new("authService", "AuthService"));

        let wants_scope =
            self.config.scope || self.config.injects.iter().any(|i| i.name == "$scope");
        if wants_scope {
            injects.push(self.add_scope(&mut file));
        }

        if let Some(model) = &self.config.model {
            let model = ModelNames::new(model, &self.paths.models);
            injects.extend(self.add_model_wiring(&mut file, &model)?);
            match self.config.kind {
                ControllerKind::List => self.add_list_wiring(&mut file, &model)?,
                ControllerKind::Add | ControllerKind::Edit => {
                    injects.extend(self.add_form_wiring(&mut file, &model)?)
                }
            }
        }

        let dir = self.dir();
        inject(&mut file, &injects, &dir)?;
        Ok(SourceFile::new(dir, file, "ts"))
    }

    fn add_acl(&self, file: &mut FileModel) -> Result<()> {
        file.add_import(
            ["AuthService", "IAclActions"],
            &self.import_from(self.paths.services.join("AuthService")),
            ImportKind::Module,
        );
        let class = file.main_class_mut();
        class.add_property(Property::new("acl", "IAclActions"))?;

        let state = self.state_name();
        class
            .add_method("registerPermissions")
            .set_static(true)
            .set_content(format!(
                "AuthService.registerPermissions('{state}', {{'{state}': [{}]}});",
                self.config.kind.actions()
            ));
        Ok(())
    }

    fn add_scope(&self, file: &mut FileModel) -> Injectable {
        let scope_name = format!("I{}Scope", to_pascal_case(&self.ctrl_name));
        file.add_interface(&scope_name).set_parent("IScope");
        file.add_import(["IScope"], "angular", ImportKind::Module);
        Injectable::new("$scope", scope_name).lib()
    }

    /// Imports and services every model-backed controller needs.
    fn add_model_wiring(&self, file: &mut FileModel, model: &ModelNames) -> Result<Vec<Injectable>> {
        file.add_import(
            [format!("I{}", model.class), model.class.clone()],
            &self.import_from(model.path.clone()),
            ImportKind::Module,
        );
        if self.config.kind != ControllerKind::List {
            file.add_import(["Err"], "vesta-util/Err", ImportKind::Module);
            file.add_import(
                ["ValidationError"],
                "vesta-schema/error/ValidationError",
                ImportKind::Module,
            );
        }
        file.main_class_mut()
            .add_property(Property::new(&model.instance, &model.class).private())?;

        let services = &self.paths.services;
        Ok(vec![
            Injectable::new("apiService", "ApiService")
                .at(services.join("ApiService").to_string_lossy()),
            Injectable::new("formService", "FormService")
                .at(services.join("FormService").to_string_lossy()),
            Injectable::new("notificationService", "NotificationService")
                .at(services.join("NotificationService").to_string_lossy()),
            Injectable::new("$mdDialog", "IDialogService")
                .at("angular.material.IDialogService")
                .lib()
                .with_import_kind(ImportKind::Namespace),
        ])
    }

    fn add_list_wiring(&self, file: &mut FileModel, model: &ModelNames) -> Result<()> {
        let m = &model.class;
        let instance = &model.instance;
        let edge = self.edge();
        let plural = &model.plural;
        let list = format!("{plural}List");
        let selected = format!("selected{}List", to_pascal_case(plural));
        let ctrl = &self.ctrl_name;
        let template_dir = match &self.config.module {
            Some(module) => format!("tpl/{module}/{ctrl}/"),
            None => format!("tpl/{ctrl}/"),
        };

        file.add_import(
            ["IQueryRequest", "IQueryResult", "IDeleteResult"],
            "vesta-schema/ICRUDResult",
            ImportKind::Module,
        );
        file.add_import(["ExtArray"], "vesta-util/ExtArray", ImportKind::Module);
        file.add_import(
            ["IDialogOptions"],
            "angular.material.IDialogOptions",
            ImportKind::Namespace,
        );

        let class = file.main_class_mut();
        class.add_property(
            Property::new(&list, format!("ExtArray<I{m}>"))
                .private()
                .with_default(format!("new ExtArray<I{m}>()")),
        )?;
        class.add_property(
            Property::new(&selected, "Array<number>")
                .private()
                .with_default("[]"),
        )?;
        class.add_property(Property::new("dtOption", "any").private())?;
        class.add_property(Property::new("currentPage", "number").private().with_default(1))?;
        class.add_property(Property::new("busy", "boolean").private().with_default(false))?;

        class.constructor_mut().append_content(format!(
            r#"
            this.acl = authService.getActionsOn('{instance}');
            this.dtOption = {{
                showFilter: false,
                title: 'List of {plural}',
                filter: '',
                order: '',
                rowsPerPage: [10, 20, 50],
                limit: 10,
                page: 1,
                total: 0,
                label: {{text: 'Records', of: 'of'}},
                loadMore: this.loadMore.bind(this)
            }};
            apiService.get<IQueryRequest<I{m}>, IQueryResult<I{m}>>('{edge}')
                .then(result => {{
                    if (result.error) return this.notificationService.toast(result.error.message);
                    this.{list}.set(result.items);
                    this.dtOption.total = result.total;
                }});"#
        ));

        class
            .add_method("loadMore")
            .add_parameter(Parameter::new("page", "number"))?
            .set_content(format!(
                r#"
                if (this.busy || page <= this.currentPage) return;
                this.busy = true;
                this.apiService.get<IQueryRequest<I{m}>, IQueryResult<I{m}>>('{edge}', {{limit: 10, page: ++this.currentPage}})
                    .then(result => {{
                        if (result.error) return this.notificationService.toast(result.error.message);
                        for (let i = 0; i < result.items.length; i++) {{
                            this.{list}.push(result.items[i]);
                        }}
                        this.dtOption.total = result.total;
                        this.busy = false;
                    }});"#
            ));

        class
            .add_method(&format!("add{m}"))
            .add_parameter(Parameter::new("event", "MouseEvent"))?
            .set_content(format!(
                r#"
                this.$mdDialog.show(<IDialogOptions>{{
                    controller: '{ctrl}AddController',
                    controllerAs: 'vm',
                    templateUrl: '{template_dir}{ctrl}AddForm.html',
                    parent: angular.element(document.body),
                    targetEvent: event
                }}).then(({instance}) => {{
                    this.{list}.push({instance});
                    this.notificationService.toast('New {instance} has been added successfully');
                }}).catch(err => err && this.notificationService.toast(err.message));"#
            ));

        class
            .add_method(&format!("edit{m}"))
            .add_parameter(Parameter::new("event", "MouseEvent"))?
            .add_parameter(Parameter::new("id", "number"))?
            .set_content(format!(
                r#"
                event.stopPropagation();
                this.$mdDialog.show(<IDialogOptions>{{
                    controller: '{ctrl}EditController',
                    controllerAs: 'vm',
                    templateUrl: '{template_dir}{ctrl}EditForm.html',
                    parent: angular.element(document.body),
                    targetEvent: event,
                    locals: {{
                        id: id
                    }}
                }}).then(({instance}: I{m}) => {{
                    this.{list}[this.{list}.indexOfByProperty('id', {instance}.id)] = {instance};
                    this.notificationService.toast('{instance} has been updated successfully');
                }}).catch(err => err && this.notificationService.toast(err.message));"#
            ));

        class
            .add_method(&format!("del{m}"))
            .add_parameter(Parameter::new("event", "MouseEvent"))?
            .set_content(format!(
                r#"
                let confirm = this.$mdDialog.confirm()
                    .parent(angular.element(document.body))
                    .title('Delete confirmation')
                    .textContent('Are you sure about deleting the selected {instance}')
                    .targetEvent(event)
                    .ok('Yes').cancel('No');
                this.$mdDialog.show(confirm).then(() => {{
                    this.apiService.delete<Array<number>, IDeleteResult>('{edge}', this.{selected})
                        .then(result => {{
                            if (result.error) return this.notificationService.toast(result.error.message);
                            this.{list}.removeByProperty('id', this.{selected});
                            this.{selected} = [];
                            this.notificationService.toast(result.items.length + ' {instance} has been deleted successfully');
                        }});
                }});"#
            ));
        Ok(())
    }

    /// Add and edit controllers back a modal form and carry their own class
    /// name (`UserAddController`).
    fn add_form_wiring(&self, file: &mut FileModel, model: &ModelNames) -> Result<Vec<Injectable>> {
        let m = &model.class;
        let instance = &model.instance;
        let edge = self.edge();
        let suffix = match self.config.kind {
            ControllerKind::Edit => "Edit",
            ControllerKind::List | ControllerKind::Add => "Add",
        };
        let class_name = format!("{}{suffix}Controller", to_pascal_case(&self.ctrl_name));

        let form = format!("{instance}Form");

        file.set_name(&class_name);
        file.add_import(["IFormController"], "angular", ImportKind::Module);
        file.add_import(["IUpsertResult"], "vesta-schema/ICRUDResult", ImportKind::Module);

        let class = file.main_class_mut();
        class.set_name(&class_name);
        class.add_property(Property::new(&form, "IFormController").private())?;
        class
            .add_method("closeFormModal")
            .set_content("this.$mdDialog.cancel();");

        let (submit, verb) = match self.config.kind {
            ControllerKind::Edit => (format!("edit{m}"), "put"),
            ControllerKind::List | ControllerKind::Add => (format!("add{m}"), "post"),
        };
        let method = class.add_method(&submit);
        if self.config.kind == ControllerKind::Edit {
            method.set_content(format!(
                "if (!this.{form}.$dirty) return this.notificationService.toast('Nothing changed');"
            ));
        }
        method.append_content(format!(
            r#"
            let validate = this.formService.evaluate(this.{instance}.validate(), this.{form});
            if (!validate) return this.notificationService.toast('Invalid form data');
            let {instance} = this.{instance}.getValues<I{m}>();
            this.apiService.{verb}<I{m}, IUpsertResult<I{m}>>('{edge}', {instance})
                .then(result => {{
                    if (result.error) throw result.error;
                    this.{instance}.id = result.items[0].id;
                }})
                .then(() => this.$mdDialog.hide(this.{instance}))
                .catch(err => {{
                    this.notificationService.toast(err.message);
                    if (err.code == Err.Code.Validation) {{
                        this.formService.evaluate((<ValidationError>err).violations, this.{form});
                    }}
                }});"#
        ));

        let mut injects = Vec::new();
        match self.config.kind {
            ControllerKind::Edit => {
                class.constructor_mut().append_content(format!(
                    r#"
                    apiService.get<IQueryRequest<I{m}>, IQueryResult<I{m}>>('{edge}/' + this.locals.id)
                        .then(result => {{
                            if (result.error) return $mdDialog.cancel(result.error);
                            this.{instance} = new {m}(result.items[0]);
                        }})
                        .catch(reason => $mdDialog.cancel(reason));"#
                ));
                file.add_import(
                    ["IQueryRequest", "IQueryResult"],
                    "vesta-schema/ICRUDResult",
                    ImportKind::Module,
                );
                injects.push(Injectable::new("locals", "any").lib());
            }
            ControllerKind::List | ControllerKind::Add => {
                class
                    .constructor_mut()
                    .append_content(format!("this.{instance} = new {m}();"));
            }
        }
        Ok(injects)
    }

    /// The route table entry, lines after the first indented by `indent`.
    pub fn route_entry(&self, indent: &str) -> String {
        let ctrl = &self.ctrl_name;
        let view = match &self.config.module {
            Some(module) => format!("{}-content@{module}", to_kebab_case(module)),
            None => "master".to_string(),
        };
        let mut template = vec!["tpl".to_string()];
        template.extend(self.config.module.clone());
        if self.config.model.is_some() {
            template.push(ctrl.clone());
        }
        let template = template.join("/");

        let lines = [
            self.route_head(),
            format!("    url: '/{ctrl}',"),
            "    views: {".to_string(),
            format!("        '{view}': {{"),
            format!("            templateUrl: '{template}/{ctrl}.html',"),
            format!("            controller: '{ctrl}Controller',"),
            "            controllerAs: 'vm'".to_string(),
            "        }".to_string(),
            "    }".to_string(),
            "});".to_string(),
        ];
        lines.join(&format!("\n{indent}"))
    }

    fn route_head(&self) -> String {
        format!("$stateProvider.state('{}', {{", self.state_name())
    }

    /// Write the controller, register its route and its aggregator entry.
    pub fn generate(&self, storage: &dyn Storage, base: &Path) -> Result<GenerateReport> {
        let source = self.build()?;
        let mut report = GenerateReport::default();

        let class_name = source.model().name().to_string();
        let path = source.path(base);
        report.record_write(path, source.write(storage, base)?);

        self.splice_route(storage, base, &mut report)?;

        let import_file = base.join(&self.paths.import_file);
        let aggregator_dir = self.paths.import_file.parent().unwrap_or(Path::new(""));
        let import_dir = relative_import_path(aggregator_dir, &self.dir());
        let registered = register_in_aggregator(
            storage,
            &import_file,
            &class_name,
            &import_dir,
            AggregatorKind::Controller,
        );
        report.record_splice(&import_file, registered)?;

        if self.config.model.is_none() {
            let sass = SassGenerator::new(&self.ctrl_name, SassKind::Page, &self.paths.scss);
            report.merge(sass.generate(storage, base)?);
        } else if self.config.kind == ControllerKind::List {
            for kind in [ControllerKind::Add, ControllerKind::Edit] {
                report.merge(self.form_generator(kind).generate(storage, base)?);
            }
        }
        Ok(report)
    }

    /// The add or edit form controller backing a model list.
    fn form_generator(&self, kind: ControllerKind) -> Self {
        let mut form = self.clone();
        form.config.kind = kind;
        form
    }

    /// The state is looked up by its head line, so a route edited after
    /// generation is still recognised.
    fn splice_route(
        &self,
        storage: &dyn Storage,
        base: &Path,
        report: &mut GenerateReport,
    ) -> Result<()> {
        let route_file = base.join(&self.paths.route_file);
        let text = storage.read_to_string(&route_file)?;
        if text.contains(&self.route_head()) {
            tracing::debug!(state = %self.state_name(), "route already registered");
            report.unchanged.push(route_file);
            return Ok(());
        }

        let indent = marker_indent(&text, Placeholder::Router).unwrap_or("");
        let entry = Splice::new(Placeholder::Router, self.route_entry(indent));
        report.record_splice(&route_file, splice_file(storage, &route_file, &[entry]))
    }
}

/// Names derived from a model reference such as `user/User`.
struct ModelNames {
    class: String,
    instance: String,
    plural: String,
    path: PathBuf,
}

impl ModelNames {
    fn new(model: &str, models_dir: &Path) -> Self {
        let class = to_pascal_case(model.rsplit('/').next().unwrap_or(model));
        let instance = to_camel_case(&class);
        Self {
            plural: plural(&instance),
            instance,
            class,
            path: models_dir.join(model),
        }
    }
}

/// Strip a trailing `Controller` (any case) and camel-case the rest.
fn normalize_name(name: &str) -> String {
    const SUFFIX: &str = "controller";
    let stem = name
        .len()
        .checked_sub(SUFFIX.len())
        .filter(|&at| at > 0)
        .and_then(|at| name.get(at..).filter(|s| s.eq_ignore_ascii_case(SUFFIX)))
        .map_or(name, |s| &name[..name.len() - s.len()]);
    to_camel_case(stem)
}

#[cfg(test)]
mod tests {
    use stencil_core::MemoryStorage;

    use super::*;

    const ROUTE_TS: &str = "\
export function route($stateProvider) {
    // <stencil:router/>
}
";

    const IMPORT_TS: &str = "\
// <stencil:import/>

export const exporter = {
    controller: {
        // <stencil:controller/>
    },
};
";

    fn project() -> MemoryStorage {
        MemoryStorage::with_files([
            ("src/app/config/route.ts", ROUTE_TS),
            ("src/app/config/import.ts", IMPORT_TS),
            ("src/scss/_common.scss", "// <stencil:scss-page/>\n"),
        ])
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("UserController"), "user");
        assert_eq!(normalize_name("user-profile"), "userProfile");
        assert_eq!(normalize_name("controller"), "controller");
        assert_eq!(normalize_name("homecontroller"), "home");
    }

    #[test]
    fn test_page_controller_source() {
        let generator = ControllerGenerator::new(ControllerConfig::new("home"), &Config::default());
        let source = generator.build().unwrap();

        assert_eq!(
            source.path(Path::new("")),
            PathBuf::from("src/app/modules/HomeController.ts")
        );
        insta::assert_snapshot!(source.render(), @r#"
        import { BaseController } from "./BaseController";
        import { AuthService, IAclActions } from "../service/AuthService";

        export class HomeController extends BaseController {
            public static $inject = ['authService'];
            public acl: IAclActions;

            constructor(private authService: AuthService) {
                super();
            }

            public static registerPermissions() {
                AuthService.registerPermissions('home', {'home': ['read']});
            }
        }
        "#);
    }

    #[test]
    fn test_route_entry_follows_marker_indent() {
        let mut config = ControllerConfig::new("user");
        config.module = Some("admin".to_string());
        config.model = Some("User".to_string());
        let generator = ControllerGenerator::new(config, &Config::default());

        assert_eq!(
            generator.route_entry("    "),
            "$stateProvider.state('admin.user', {
        url: '/user',
        views: {
            'admin-content@admin': {
                templateUrl: 'tpl/admin/user/user.html',
                controller: 'userController',
                controllerAs: 'vm'
            }
        }
    });"
        );
    }

    #[test]
    fn test_generate_wires_route_and_aggregator() {
        let storage = project();
        let generator = ControllerGenerator::new(ControllerConfig::new("home"), &Config::default());
        let report = generator.generate(&storage, Path::new("")).unwrap();

        assert!(report.is_clean());
        assert_eq!(report.written.len(), 2);
        let route = storage.get("src/app/config/route.ts").unwrap();
        assert!(route.contains("    $stateProvider.state('home', {\n        url: '/home',"));
        assert!(route.ends_with("    });\n    // <stencil:router/>\n}\n"));

        let import = storage.get("src/app/config/import.ts").unwrap();
        assert!(import.starts_with(
            "import { HomeController } from \"../modules/HomeController\";\n// <stencil:import/>\n"
        ));
        assert!(import.contains("        homeController: HomeController,\n        // <stencil:controller/>"));

        assert_eq!(
            storage.get("src/scss/_common.scss").unwrap(),
            "@import 'pages/home';\n// <stencil:scss-page/>\n"
        );
    }

    #[test]
    fn test_generate_twice_leaves_aggregators_alone() {
        let storage = project();
        let generator = ControllerGenerator::new(ControllerConfig::new("home"), &Config::default());
        generator.generate(&storage, Path::new("")).unwrap();
        let route = storage.get("src/app/config/route.ts").unwrap();
        let import = storage.get("src/app/config/import.ts").unwrap();

        let report = generator.generate(&storage, Path::new("")).unwrap();
        assert!(report.spliced.is_empty());
        assert_eq!(storage.get("src/app/config/route.ts").unwrap(), route);
        assert_eq!(storage.get("src/app/config/import.ts").unwrap(), import);
    }

    #[test]
    fn test_missing_route_marker_does_not_stop_registration() {
        let storage = project();
        storage.insert("src/app/config/route.ts", "export function route() {}\n");
        let generator = ControllerGenerator::new(ControllerConfig::new("home"), &Config::default());
        let report = generator.generate(&storage, Path::new("")).unwrap();

        assert_eq!(report.failed.len(), 1);
        assert_eq!(report.failed[0].0, PathBuf::from("src/app/config/route.ts"));
        assert!(
            storage
                .get("src/app/config/import.ts")
                .unwrap()
                .contains("homeController: HomeController,")
        );
    }

    #[test]
    fn test_list_controller_wiring() {
        let mut config = ControllerConfig::new("UserController");
        config.model = Some("User".to_string());
        config.scope = true;
        let generator = ControllerGenerator::new(config, &Config::default());
        let code = generator.build().unwrap().render();

        assert!(code.contains("export interface IUserScope extends IScope {}"));
        assert!(code.contains(
            "public static $inject = ['authService', '$scope', 'apiService', 'formService', 'notificationService', '$mdDialog'];"
        ));
        assert!(code.contains("import { FormService } from \"../../service/FormService\";"));
        assert!(code.contains("import IDialogService = angular.material.IDialogService;"));
        assert!(code.contains("import IDialogOptions = angular.material.IDialogOptions;"));
        assert!(code.contains(
            "    private usersList: ExtArray<IUser> = new ExtArray<IUser>();\n\
             \x20   private selectedUsersList: Array<number> = [];\n\
             \x20   private dtOption: any;\n\
             \x20   private currentPage: number = 1;\n"
        ));
        assert!(code.contains("        super();\n        this.acl = authService.getActionsOn('user');"));
        assert!(code.contains("        this.dtOption = {\n            showFilter: false,\n            title: 'List of users',"));
        assert!(code.contains("            this.usersList.set(result.items);\n            this.dtOption.total = result.total;"));
        assert!(!code.contains("vesta-util/Err"));
        assert!(code.contains("    public loadMore(page: number) {\n        if (this.busy"));
        assert!(code.contains("    public delUser(event: MouseEvent) {"));
        assert!(code.contains("import { IUser, User } from \"../../../client/app/cmn/models/User\";"));
    }

    #[test]
    fn test_list_controller_opens_form_dialogs() {
        let mut config = ControllerConfig::new("user");
        config.module = Some("admin".to_string());
        config.model = Some("User".to_string());
        let generator = ControllerGenerator::new(config, &Config::default());
        let code = generator.build().unwrap().render();

        let load_more = code.find("public loadMore(").unwrap();
        let add = code.find("public addUser(event: MouseEvent) {").unwrap();
        let edit = code.find("public editUser(event: MouseEvent, id: number) {").unwrap();
        let del = code.find("public delUser(event: MouseEvent) {").unwrap();
        assert!(load_more < add && add < edit && edit < del);

        assert!(code.contains(
            "        this.$mdDialog.show(<IDialogOptions>{\n\
             \x20           controller: 'userAddController',\n\
             \x20           controllerAs: 'vm',\n\
             \x20           templateUrl: 'tpl/admin/user/userAddForm.html',"
        ));
        assert!(code.contains("            this.usersList.push(user);\n"));
        assert!(code.contains("        event.stopPropagation();\n"));
        assert!(code.contains("templateUrl: 'tpl/admin/user/userEditForm.html',"));
        assert!(code.contains("controller: 'userEditController',"));
        assert!(code.contains("            locals: {\n                id: id\n            }\n"));
        assert!(code.contains("this.usersList[this.usersList.indexOfByProperty('id', user.id)] = user;"));
        assert!(code.contains("' user has been deleted successfully');"));
    }

    #[test]
    fn test_add_controller_submits_form() {
        let mut config = ControllerConfig::new("user");
        config.model = Some("User".to_string());
        config.kind = ControllerKind::Add;
        let code = ControllerGenerator::new(config, &Config::default())
            .build()
            .unwrap()
            .render();

        assert!(code.contains("import { Err } from \"vesta-util/Err\";"));
        assert!(code.contains("import { ValidationError } from \"vesta-schema/error/ValidationError\";"));
        assert!(code.contains("import { IUpsertResult } from \"vesta-schema/ICRUDResult\";"));
        assert!(code.contains("private formService: FormService"));
        assert!(code.contains(
            "    public addUser() {\n\
             \x20       let validate = this.formService.evaluate(this.user.validate(), this.userForm);\n"
        ));
        assert!(code.contains("this.apiService.post<IUser, IUpsertResult<IUser>>('user', user)"));
        assert!(code.contains("            .then(() => this.$mdDialog.hide(this.user))\n"));
        assert!(code.contains(
            "                this.formService.evaluate((<ValidationError>err).violations, this.userForm);\n"
        ));
        assert!(!code.contains("IDialogOptions"));
    }

    #[test]
    fn test_edit_controller_checks_dirty_form() {
        let mut config = ControllerConfig::new("user");
        config.model = Some("User".to_string());
        config.kind = ControllerKind::Edit;
        let source = ControllerGenerator::new(config, &Config::default()).build().unwrap();

        assert_eq!(source.model().name(), "UserEditController");
        let code = source.render();
        assert!(code.contains(
            "import { IUpsertResult, IQueryRequest, IQueryResult } from \"vesta-schema/ICRUDResult\";"
        ));
        assert!(code.contains(
            "    public editUser() {\n\
             \x20       if (!this.userForm.$dirty) return this.notificationService.toast('Nothing changed');\n\
             \x20       let validate = this.formService.evaluate(this.user.validate(), this.userForm);\n"
        ));
        assert!(code.contains("this.apiService.put<IUser, IUpsertResult<IUser>>('user', user)"));
        assert!(code.contains("private locals: any"));
    }

    #[test]
    fn test_list_generate_writes_form_controllers() {
        let storage = project();
        let mut config = ControllerConfig::new("user");
        config.model = Some("User".to_string());
        let report = ControllerGenerator::new(config, &Config::default())
            .generate(&storage, Path::new(""))
            .unwrap();

        assert!(report.is_clean());
        assert_eq!(
            report.written,
            [
                PathBuf::from("src/app/modules/user/UserController.ts"),
                PathBuf::from("src/app/modules/user/UserAddController.ts"),
                PathBuf::from("src/app/modules/user/UserEditController.ts"),
            ]
        );
        let route = storage.get("src/app/config/route.ts").unwrap();
        assert_eq!(route.matches("$stateProvider.state('user', {").count(), 1);

        let import = storage.get("src/app/config/import.ts").unwrap();
        assert!(import.contains("        userController: UserController,\n"));
        assert!(import.contains("        userAddController: UserAddController,\n"));
        assert!(import.contains("        userEditController: UserEditController,\n"));
        assert!(storage.get("src/scss/pages/_user.scss").is_none());
    }

    #[test]
    fn test_add_controller_is_renamed() {
        let mut config = ControllerConfig::new("user");
        config.model = Some("User".to_string());
        config.kind = ControllerKind::Add;
        let generator = ControllerGenerator::new(config, &Config::default());
        let source = generator.build().unwrap();

        assert_eq!(source.model().name(), "UserAddController");
        let code = source.render();
        assert!(code.contains("export class UserAddController extends BaseController {"));
        assert!(code.contains("AuthService.registerPermissions('user', {'user': ['read', 'add']});"));
        assert!(code.contains("this.user = new User();"));
    }
}
